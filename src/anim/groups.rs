//! Circle arrangements and startup preprocessing
//!
//! An arrangement is one animation keyframe: four circles in the plane.
//! Preprocessing runs once at startup: every arrangement is recentered so
//! its centroid sits at the origin, and a traversal permutation over the
//! table is drawn with Fisher-Yates. Both are immutable afterwards; the
//! table is never mutated by the frame loop.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rng::Ran;

/// A circle in the affine plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            center: DVec2::new(cx, cy),
            radius,
        }
    }

    /// Sample points around the circumference (for line-loop renderers)
    pub fn outline_points(&self, num_points: usize) -> Vec<DVec2> {
        (0..num_points)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / num_points.max(1) as f64;
                self.center + self.radius * DVec2::new(theta.cos(), theta.sin())
            })
            .collect()
    }
}

/// One animation keyframe: exactly four circles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    pub circles: [Circle; 4],
}

impl Arrangement {
    /// Build from raw `[cx, cy, r]` triples
    pub fn from_raw(raw: &[[f64; 3]; 4]) -> Self {
        Self {
            circles: raw.map(|[cx, cy, r]| Circle::new(cx, cy, r)),
        }
    }

    /// Mean of the four centers
    pub fn centroid(&self) -> DVec2 {
        self.circles.iter().map(|c| c.center).sum::<DVec2>() / 4.0
    }

    /// Translate so the centroid is the origin. Radii are untouched.
    /// Idempotent up to floating-point error.
    pub fn recenter(&mut self) {
        let centroid = self.centroid();
        for circle in &mut self.circles {
            circle.center -= centroid;
        }
    }
}

/// Fisher-Yates permutation of `[0, n)` drawn from `rng`.
///
/// Uses the generator's range draw so the permutation is fully determined
/// by the one startup seed. For n <= 1 the trivial permutation is returned
/// without drawing.
pub fn shuffle_order(n: usize, rng: &mut Ran) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    if n <= 1 {
        return order;
    }
    for i in 0..n - 1 {
        let j = rng.int_range(i as i32, n as i32) as usize;
        order.swap(i, j);
    }
    order
}

/// Recentered arrangement table plus its traversal permutation.
///
/// Arena + index: the table keeps storage order, the permutation defines
/// visit order. Both are read-only after construction.
#[derive(Debug, Clone)]
pub struct ArrangementSet {
    arrangements: Vec<Arrangement>,
    order: Vec<usize>,
}

impl ArrangementSet {
    /// Preprocess a raw table: recenter every group, shuffle visit order.
    pub fn new(raw: &[[[f64; 3]; 4]], rng: &mut Ran) -> Self {
        let mut arrangements: Vec<Arrangement> =
            raw.iter().map(Arrangement::from_raw).collect();
        for arrangement in &mut arrangements {
            arrangement.recenter();
        }
        let order = shuffle_order(arrangements.len(), rng);
        Self {
            arrangements,
            order,
        }
    }

    /// Number of arrangements
    pub fn len(&self) -> usize {
        self.arrangements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrangements.is_empty()
    }

    /// Arrangement at a traversal position (not a storage index)
    pub fn at_position(&self, position: usize) -> &Arrangement {
        &self.arrangements[self.order[position]]
    }

    /// The traversal permutation
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
