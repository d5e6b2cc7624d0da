//! Chamfered boolean combinations.
//!
//! The chamfer flavor cuts a 45-degree planar edge (the diagonal of a
//! square of size `r`) where the two surfaces meet.

use std::f32::consts::FRAC_1_SQRT_2;

/// Union with a 45-degree chamfered edge of size `r`.
///
/// Reduces to `min(a, b)` at `r = 0`.
#[inline(always)]
pub fn union_chamfer(a: f32, b: f32, r: f32) -> f32 {
    a.min(b).min((a - r + b) * FRAC_1_SQRT_2)
}

/// Intersection with a 45-degree chamfered edge of size `r`.
///
/// Intersection has to deal with what is normally the inside of the
/// union result, so its formula differs from the union's by more than a
/// sign: the chamfer plane is pushed out by `r` rather than pulled in.
#[inline(always)]
pub fn intersection_chamfer(a: f32, b: f32, r: f32) -> f32 {
    a.max(b).max((a + r + b) * FRAC_1_SQRT_2)
}

/// Difference with a chamfered edge, built from the intersection:
/// `intersection_chamfer(a, -b, r)`.
#[inline(always)]
pub fn difference_chamfer(a: f32, b: f32, r: f32) -> f32 {
    intersection_chamfer(a, -b, r)
}
