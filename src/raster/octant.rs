//! Octant classification for line stepping.
//!
//! After normalizing a segment to the upper half-plane (dy >= 0), four
//! stepping templates remain. The code is derived once per call from the
//! deltas: bit 0 set when the segment is steep (|dy| > |dx|), bit 1 set
//! when dx < 0. Read as an integer the four values form a gray code
//! (0, 1, 3, 2 walking counter-clockwise), which is why `SteepLeft` and
//! `ShallowLeft` look swapped relative to their discriminants.

/// Stepping template for a half-plane-normalized segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Octant {
    /// dx >= 0, |dx| >= |dy|: x is the major axis, stepping right.
    ShallowRight = 0,
    /// dx >= 0, |dy| > |dx|: y is the major axis, x drifts right.
    SteepRight = 1,
    /// dx < 0, |dy| > |dx|: y is the major axis, x drifts left.
    SteepLeft = 3,
    /// dx < 0, |dx| >= |dy|: x is the major axis, stepping left.
    ShallowLeft = 2,
}

/// Classify a segment's deltas. Requires `dy >= 0`.
pub(crate) fn classify(dx: i32, dy: i32) -> Octant {
    debug_assert!(dy >= 0);

    match (dx < 0, dy > dx.abs()) {
        (false, false) => Octant::ShallowRight,
        (false, true) => Octant::SteepRight,
        (true, true) => Octant::SteepLeft,
        (true, false) => Octant::ShallowLeft,
    }
}

/// Swap endpoints if needed so that the segment runs upward (dy >= 0).
pub(crate) fn upper_half(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    if y2 < y1 {
        (x2, y2, x1, y1)
    } else {
        (x1, y1, x2, y2)
    }
}
