//! Top-level animation engine
//!
//! Owns every piece of mutable state the frame loop touches: the seeded
//! RNG, the preprocessed arrangement table with its traversal order, the
//! transition clock, the sharpness control, and the overlay bookkeeping.
//! Constructed once at startup and driven by exactly one thread; nothing
//! in here blocks or spawns.

use super::clock::AnimationClock;
use super::data;
use super::ease::{SharpnessControl, sample_curve};
use super::groups::ArrangementSet;
use super::rng::Ran;
use crate::config::Config;
use crate::consts::*;
use crate::error::Error;
use crate::input::InputEvent;
use crate::render::{FrameOutput, OverlayFrame};

/// The animation engine
#[derive(Debug)]
pub struct Engine {
    /// Process-scoped RNG; fully determines the traversal order
    rng: Ran,
    set: ArrangementSet,
    clock: AnimationClock,
    sharpness: SharpnessControl,
    transition_secs: f64,
    frame_rate: u32,
    /// Monotonic frame counter, never reset
    frame_counter: u64,
    overlay_pinned: bool,
    /// Overlay stays revealed while `frame_counter` is below this
    overlay_reveal_until: u64,
}

impl Engine {
    /// Build an engine over the built-in arrangement table.
    pub fn new(config: &Config, rng: Ran) -> Result<Self, Error> {
        Self::with_table(config, rng, &data::CIRCLE_GROUPS)
    }

    /// Build an engine over an explicit raw table (tests, alternate data).
    pub fn with_table(
        config: &Config,
        mut rng: Ran,
        raw: &[[[f64; 3]; 4]],
    ) -> Result<Self, Error> {
        config.validate()?;
        if raw.is_empty() {
            return Err(Error::Config("arrangement table is empty".into()));
        }
        let set = ArrangementSet::new(raw, &mut rng);
        let clock = AnimationClock::new(AnimationClock::frames_for(
            config.transition_secs,
            config.frame_rate,
        ));
        log::info!(
            "Engine ready: {} arrangements, {} frames/transition, sharpness control {}",
            set.len(),
            clock.frames_per_transition(),
            config.sharpness_control,
        );
        Ok(Self {
            rng,
            set,
            clock,
            sharpness: SharpnessControl::new(config.sharpness_control),
            transition_secs: config.transition_secs,
            frame_rate: config.frame_rate,
            frame_counter: 0,
            overlay_pinned: false,
            overlay_reveal_until: 0,
        })
    }

    /// Build an engine seeded from the system entropy source.
    pub fn from_entropy(config: &Config) -> Result<Self, Error> {
        Self::new(config, Ran::from_entropy()?)
    }

    /// Apply one discrete control event.
    ///
    /// Duration and sharpness are clamped here so the clock never sees a
    /// value it cannot run on; adjusting either reveals the overlay for a
    /// short window.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::ToggleOverlayPin => {
                self.overlay_pinned = !self.overlay_pinned;
                log::info!("Overlay pinned: {}", self.overlay_pinned);
            }
            InputEvent::SharpnessUp => {
                self.sharpness.step_up();
                self.reveal_overlay();
                log::info!(
                    "Sharpness control {} (exponent {:.2})",
                    self.sharpness.value(),
                    self.sharpness.exponent(),
                );
            }
            InputEvent::SharpnessDown => {
                self.sharpness.step_down();
                self.reveal_overlay();
                log::info!(
                    "Sharpness control {} (exponent {:.2})",
                    self.sharpness.value(),
                    self.sharpness.exponent(),
                );
            }
            InputEvent::DurationUp => {
                self.set_transition_secs(self.transition_secs + TRANSITION_STEP_SECS);
            }
            InputEvent::DurationDown => {
                self.set_transition_secs(self.transition_secs - TRANSITION_STEP_SECS);
            }
        }
    }

    fn set_transition_secs(&mut self, secs: f64) {
        self.transition_secs = secs.clamp(MIN_TRANSITION_SECS, MAX_TRANSITION_SECS);
        self.clock
            .set_duration(self.transition_secs, self.frame_rate);
        self.reveal_overlay();
        log::info!(
            "Transition {:.1}s ({} frames)",
            self.transition_secs,
            self.clock.frames_per_transition(),
        );
    }

    fn reveal_overlay(&mut self) {
        self.overlay_reveal_until =
            self.frame_counter + (OVERLAY_REVEAL_SECS * f64::from(self.frame_rate)) as u64;
    }

    fn overlay_visible(&self) -> bool {
        self.overlay_pinned || self.frame_counter < self.overlay_reveal_until
    }

    /// Produce one frame of output and advance the clock.
    pub fn frame(&mut self) -> FrameOutput {
        let circles = self
            .clock
            .blend_at_progress(&self.set, self.sharpness.exponent());
        let overlay = self.overlay_visible().then(|| OverlayFrame {
            points: sample_curve(self.sharpness.exponent(), OVERLAY_SAMPLES),
            reveal_until: self.overlay_reveal_until,
            pinned: self.overlay_pinned,
        });
        let output = FrameOutput {
            frame: self.frame_counter,
            circles,
            overlay,
        };

        let position_before = self.clock.position();
        self.clock.tick(self.set.len());
        if self.clock.position() != position_before {
            log::debug!(
                "Transition complete: position {} -> {} (group {})",
                position_before,
                self.clock.position(),
                self.set.order()[self.clock.position()],
            );
        }
        self.frame_counter += 1;
        output
    }

    /// Current transition duration (seconds)
    pub fn transition_secs(&self) -> f64 {
        self.transition_secs
    }

    /// Current sharpness control state
    pub fn sharpness(&self) -> SharpnessControl {
        self.sharpness
    }

    /// The preprocessed arrangement table and traversal order
    pub fn arrangements(&self) -> &ArrangementSet {
        &self.set
    }

    /// The transition clock
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Draw from the engine's RNG (post-startup uses, e.g. future variants)
    pub fn rng_mut(&mut self) -> &mut Ran {
        &mut self.rng
    }
}
