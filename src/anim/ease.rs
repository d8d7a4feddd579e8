//! Nonlinear easing between arrangements
//!
//! A symmetric power sigmoid: below the midpoint it rises as
//! `0.5 * (2t)^s`, above it the curve is mirrored. Sharpness 1 is the
//! identity; as sharpness grows the curve approaches a step at t = 0.5.
//! The exponent is driven by a small bounded integer control so keyboard
//! steps sweep a useful perceptual range.

use glam::DVec2;

use crate::consts::{DEFAULT_SHARPNESS_CONTROL, SHARPNESS_CONTROL_MAX, SHARPNESS_CONTROL_MIN};

/// Eased progress for `t` in [0, 1] with the given sharpness exponent.
///
/// `ease(0) = 0`, `ease(0.5) = 0.5`, `ease(1) = 1`; monotonically
/// non-decreasing for sharpness >= 1.
pub fn ease(t: f64, sharpness: f64) -> f64 {
    if t < 0.5 {
        0.5 * (2.0 * t).powf(sharpness)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powf(sharpness)
    }
}

/// Sample `(t, ease(t))` at `num_points` points for the overlay polyline
pub fn sample_curve(sharpness: f64, num_points: usize) -> Vec<DVec2> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / (num_points - 1).max(1) as f64;
            DVec2::new(t, ease(t, sharpness))
        })
        .collect()
}

/// Bounded integer control mapped to a sharpness exponent.
///
/// The minimum control value means "linear" and maps to exactly 1.0; every
/// other value k maps to `2^(k/2 - 2) + 1`, so each step up roughly
/// multiplies the felt abruptness by sqrt(2). Steps outside the bounds are
/// no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharpnessControl {
    value: i32,
}

impl Default for SharpnessControl {
    fn default() -> Self {
        Self {
            value: DEFAULT_SHARPNESS_CONTROL,
        }
    }
}

impl SharpnessControl {
    /// Clamping constructor
    pub fn new(value: i32) -> Self {
        Self {
            value: value.clamp(SHARPNESS_CONTROL_MIN, SHARPNESS_CONTROL_MAX),
        }
    }

    /// Current control value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The sharpness exponent this control selects
    pub fn exponent(&self) -> f64 {
        if self.value == SHARPNESS_CONTROL_MIN {
            1.0
        } else {
            (f64::from(self.value) / 2.0 - 2.0).exp2() + 1.0
        }
    }

    /// Step the control up one notch; clamped at the top
    pub fn step_up(&mut self) {
        self.value = (self.value + 1).min(SHARPNESS_CONTROL_MAX);
    }

    /// Step the control down one notch; clamped at the bottom
    pub fn step_down(&mut self) {
        self.value = (self.value - 1).max(SHARPNESS_CONTROL_MIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ease_fixed_points() {
        for s in [1.0, 2.0, 5.0, 17.0, 100.0] {
            assert_eq!(ease(0.0, s), 0.0);
            assert_eq!(ease(0.5, s), 0.5);
            assert_eq!(ease(1.0, s), 1.0);
        }
    }

    #[test]
    fn test_ease_linear_at_sharpness_one() {
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            assert!((ease(t, 1.0) - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ease_sharpens_toward_step() {
        // High sharpness pushes early t toward 0 and late t toward 1
        assert!(ease(0.25, 40.0) < 1e-6);
        assert!(ease(0.75, 40.0) > 1.0 - 1e-6);
        // and is steeper at the midpoint than the gentle curve
        assert!(ease(0.45, 17.0) < ease(0.45, 2.0));
    }

    #[test]
    fn test_control_exponent_mapping() {
        assert_eq!(SharpnessControl::new(SHARPNESS_CONTROL_MIN).exponent(), 1.0);
        // k = 12 -> 2^4 + 1
        assert_eq!(SharpnessControl::new(12).exponent(), 17.0);
        // k = 4 -> 2^0 + 1
        assert_eq!(SharpnessControl::new(4).exponent(), 2.0);
    }

    #[test]
    fn test_control_steps_clamp() {
        let mut control = SharpnessControl::new(SHARPNESS_CONTROL_MAX);
        control.step_up();
        assert_eq!(control.value(), SHARPNESS_CONTROL_MAX);

        let mut control = SharpnessControl::new(SHARPNESS_CONTROL_MIN);
        control.step_down();
        assert_eq!(control.value(), SHARPNESS_CONTROL_MIN);

        let mut control = SharpnessControl::default();
        control.step_up();
        assert_eq!(control.value(), DEFAULT_SHARPNESS_CONTROL + 1);
        control.step_down();
        control.step_down();
        assert_eq!(control.value(), DEFAULT_SHARPNESS_CONTROL - 1);
    }

    #[test]
    fn test_sample_curve_spans_unit_square() {
        let points = sample_curve(17.0, 64);
        assert_eq!(points.len(), 64);
        assert_eq!(points[0], DVec2::new(0.0, 0.0));
        assert_eq!(points[63], DVec2::new(1.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_ease_monotonic_for_sharpness_ge_one(
            t1 in 0.0f64..1.0,
            t2 in 0.0f64..1.0,
            s in 1.0f64..64.0,
        ) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            prop_assert!(ease(lo, s) <= ease(hi, s) + 1e-12);
        }

        #[test]
        fn prop_ease_stays_in_unit_interval(t in 0.0f64..=1.0, s in 1.0f64..64.0) {
            let e = ease(t, s);
            prop_assert!((0.0..=1.0).contains(&e));
        }
    }
}
