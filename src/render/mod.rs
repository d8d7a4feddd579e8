//! Renderer boundary
//!
//! The core hands a [`FrameOutput`] to a [`FrameRenderer`] once per tick and
//! knows nothing else about drawing. Window and GPU integration live in the
//! consuming application; this crate ships only the data types and a logging
//! renderer for headless runs and tests.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::anim::Circle;

/// World half-extent the arrangement table is authored against. Renderers
/// should map [-VIEW_HALF_EXTENT, VIEW_HALF_EXTENT] onto the shorter window
/// axis.
pub const VIEW_HALF_EXTENT: f64 = 14.5;

/// Easing-curve overlay for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayFrame {
    /// `(t, ease(t))` samples in the unit square, in drawing order
    pub points: Vec<DVec2>,
    /// Frame counter value until which the overlay stays revealed;
    /// renderers fade out as the current frame approaches it
    pub reveal_until: u64,
    /// Overlay pinned on by the user (no fade-out)
    pub pinned: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Monotonic frame counter
    pub frame: u64,
    /// The four blended circles to draw as filled translucent shapes
    pub circles: [Circle; 4],
    /// Easing-curve overlay, present only while revealed or pinned
    pub overlay: Option<OverlayFrame>,
}

/// Consumer of per-frame core output
pub trait FrameRenderer {
    fn draw_frame(&mut self, frame: &FrameOutput);
}

/// Logging renderer for headless runs. Draws nothing; traces what a real
/// renderer would receive.
#[derive(Debug, Default)]
pub struct TraceRenderer;

impl FrameRenderer for TraceRenderer {
    fn draw_frame(&mut self, frame: &FrameOutput) {
        for (i, c) in frame.circles.iter().enumerate() {
            log::debug!(
                "frame {} circle {i}: center ({:.3}, {:.3}) radius {:.3}",
                frame.frame,
                c.center.x,
                c.center.y,
                c.radius,
            );
        }
        if let Some(overlay) = &frame.overlay {
            log::debug!(
                "frame {} overlay: {} points, reveal until {}{}",
                frame.frame,
                overlay.points.len(),
                overlay.reveal_until,
                if overlay.pinned { " (pinned)" } else { "" },
            );
        }
    }
}
