//! Static arrangement table
//!
//! Each group is four circles as `[cx, cy, r]` triples, authored against a
//! world half-extent of 14.5 (see `render::VIEW_HALF_EXTENT`). Centroids are
//! not zeroed here; `ArrangementSet` recenters every group at startup.

/// Number of circle groups in the table
pub const NUM_GROUPS: usize = 17;

/// The raw circle groups: `NUM_GROUPS` x 4 circles x `[cx, cy, r]`
pub const CIRCLE_GROUPS: [[[f64; 3]; 4]; NUM_GROUPS] = [
    // row of four disjoint
    [
        [-9.0, 0.0, 2.6],
        [-3.0, 0.0, 2.6],
        [3.0, 0.0, 2.6],
        [9.0, 0.0, 2.6],
    ],
    // concentric nest
    [
        [0.0, 0.0, 2.0],
        [0.0, 0.0, 4.2],
        [0.0, 0.0, 6.4],
        [0.0, 0.0, 8.6],
    ],
    // nested triple beside a lone circle
    [
        [-3.5, 0.0, 2.0],
        [-3.5, 0.0, 4.0],
        [-3.5, 0.0, 6.0],
        [7.5, 0.0, 2.5],
    ],
    // two tangent pairs
    [
        [-7.0, 3.5, 2.5],
        [-2.0, 3.5, 2.5],
        [2.0, -4.0, 3.0],
        [8.0, -4.0, 3.0],
    ],
    // tangent chain
    [
        [-9.0, 0.0, 3.0],
        [-3.0, 0.0, 3.0],
        [3.0, 0.0, 3.0],
        [9.0, 0.0, 3.0],
    ],
    // overlapping pair with a circle in the lens and one apart
    [
        [-2.0, -1.0, 5.0],
        [2.0, -1.0, 5.0],
        [0.0, -1.0, 1.3],
        [0.5, 7.5, 1.8],
    ],
    // pencil: all four through a common point
    [
        [3.0, 0.0, 3.0],
        [-3.0, 0.0, 3.0],
        [0.0, 3.0, 3.0],
        [0.0, -3.0, 3.0],
    ],
    // one large containing three disjoint
    [
        [0.0, 0.0, 9.0],
        [-4.0, 1.0, 2.0],
        [4.0, 2.5, 2.0],
        [1.0, -4.5, 1.6],
    ],
    // large containing a nested pair and a small
    [
        [0.0, 0.0, 8.8],
        [-3.0, 0.5, 3.6],
        [-3.0, 0.5, 1.6],
        [4.2, -2.0, 1.8],
    ],
    // concentric pair with two disjoint outside
    [
        [-5.0, 0.0, 2.2],
        [-5.0, 0.0, 4.4],
        [3.5, 3.0, 2.4],
        [5.5, -4.5, 2.4],
    ],
    // diamond of overlapping circles
    [
        [0.0, 4.5, 3.6],
        [4.5, 0.0, 3.6],
        [0.0, -4.5, 3.6],
        [-4.5, 0.0, 3.6],
    ],
    // three mutually tangent with one in the gap
    [
        [-3.0, -2.6, 3.0],
        [3.0, -2.6, 3.0],
        [0.0, 2.6, 3.0],
        [0.0, -0.85, 0.75],
    ],
    // two crossing pairs
    [
        [-4.5, 2.0, 3.4],
        [-1.5, 2.0, 3.4],
        [1.5, -2.0, 3.4],
        [4.5, -2.0, 3.4],
    ],
    // internally tangent pair plus two outside
    [
        [-3.0, 0.0, 6.0],
        [-6.0, 0.0, 3.0],
        [6.0, 3.5, 2.2],
        [6.0, -3.5, 2.2],
    ],
    // square corners, disjoint
    [
        [-5.5, 5.5, 2.8],
        [5.5, 5.5, 2.8],
        [5.5, -5.5, 2.8],
        [-5.5, -5.5, 2.8],
    ],
    // asymmetric mix: overlap, containment, lone
    [
        [-6.0, 3.0, 3.8],
        [-3.5, 1.0, 2.6],
        [-6.5, 3.5, 1.2],
        [6.0, -3.0, 2.9],
    ],
    // flower: four equal circles overlapping at center
    [
        [2.2, 2.2, 3.4],
        [-2.2, 2.2, 3.4],
        [-2.2, -2.2, 3.4],
        [2.2, -2.2, 3.4],
    ],
];
