//! Engrave shaping operator.

use std::f32::consts::FRAC_1_SQRT_2;

/// Carve a v-shaped engraving of depth `r` into `a` where the surface of
/// `b` crosses it.
///
/// Not a boolean: `a` is permanently modified, `b` only acts as the
/// engraving tool.
#[inline(always)]
pub fn engrave(a: f32, b: f32, r: f32) -> f32 {
    a.max((a + r - b.abs()) * FRAC_1_SQRT_2)
}
