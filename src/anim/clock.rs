//! Per-frame transition state machine
//!
//! Two counters are the whole state: the traversal position and the frame
//! within the current transition. Invariant: `frame < frames_per_transition`
//! at all times between ticks. Wrapping the frame counter always advances
//! the traversal position by one, so the animation loops forever through
//! the shuffled order.

use super::ease::ease;
use super::groups::{ArrangementSet, Circle};
use crate::lerp;

/// Frame-counting clock driving one transition after another
#[derive(Debug, Clone)]
pub struct AnimationClock {
    /// Position in the traversal order (not a storage index)
    position: usize,
    /// Frame within the current transition
    frame: u32,
    /// Total frames per transition
    frames_per_transition: u32,
}

impl AnimationClock {
    /// Clock at position 0, frame 0.
    ///
    /// `frames_per_transition` is clamped to >= 1; the duration floor in the
    /// engine keeps callers away from zero in the first place.
    pub fn new(frames_per_transition: u32) -> Self {
        Self {
            position: 0,
            frame: 0,
            frames_per_transition: frames_per_transition.max(1),
        }
    }

    /// Frames for a transition of `secs` at `frame_rate` Hz
    pub fn frames_for(secs: f64, frame_rate: u32) -> u32 {
        (secs * f64::from(frame_rate)).round().max(1.0) as u32
    }

    /// Current traversal position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Frame within the current transition
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Total frames per transition
    pub fn frames_per_transition(&self) -> u32 {
        self.frames_per_transition
    }

    /// Linear fraction of the current transition completed, in [0, 1)
    pub fn progress(&self) -> f64 {
        f64::from(self.frame) / f64::from(self.frames_per_transition)
    }

    /// Advance one frame. On transition completion the frame counter keeps
    /// its overshoot (subtract, not reset) and the position steps forward
    /// through the traversal order of `n` arrangements.
    pub fn tick(&mut self, n: usize) {
        self.frame += 1;
        if self.frame >= self.frames_per_transition {
            self.frame -= self.frames_per_transition;
            self.position = (self.position + 1) % n;
        }
    }

    /// Change the transition duration mid-flight.
    ///
    /// The frame counter is rescaled by the ratio of new to old frame counts
    /// so the progress fraction carries over without a visible jump. Integer
    /// truncation keeps the result strictly below the new total.
    pub fn set_duration(&mut self, secs: f64, frame_rate: u32) {
        let old = self.frames_per_transition;
        let new = Self::frames_for(secs, frame_rate);
        self.frame = (u64::from(self.frame) * u64::from(new) / u64::from(old)) as u32;
        self.frames_per_transition = new;
    }

    /// Blend the current and next arrangements with an eased weight.
    ///
    /// Every attribute (center x, center y, radius) of each of the four
    /// slots is interpolated independently; weight 0 returns the current
    /// arrangement exactly, weight 1 the next.
    pub fn blend(&self, set: &ArrangementSet, eased: f64) -> [Circle; 4] {
        let curr = set.at_position(self.position);
        let next = set.at_position((self.position + 1) % set.len());
        std::array::from_fn(|i| {
            let (a, b) = (curr.circles[i], next.circles[i]);
            Circle {
                center: glam::DVec2::new(
                    lerp(a.center.x, b.center.x, eased),
                    lerp(a.center.y, b.center.y, eased),
                ),
                radius: lerp(a.radius, b.radius, eased),
            }
        })
    }

    /// Eased blend at the clock's current progress
    pub fn blend_at_progress(&self, set: &ArrangementSet, sharpness: f64) -> [Circle; 4] {
        self.blend(set, ease(self.progress(), sharpness))
    }
}
