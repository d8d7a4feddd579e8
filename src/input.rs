//! Discrete control events
//!
//! Input plumbing (keyboard, window events) lives outside this crate; the
//! adapter maps whatever it receives onto these events and feeds them to
//! [`Engine::apply`](crate::anim::Engine::apply). Anything else (quit,
//! fullscreen, ...) never reaches the core.

/// A single user control step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Keep the easing-curve overlay visible until toggled again
    ToggleOverlayPin,
    /// Sharpen the easing curve one notch
    SharpnessUp,
    /// Soften the easing curve one notch
    SharpnessDown,
    /// Lengthen the transition by one step
    DurationUp,
    /// Shorten the transition by one step
    DurationDown,
}
