//! Groove shaping operator.

/// Cut a carpenter-style rectangular groove out of `a` along the surface
/// of `b`, `depth` deep and `2 * thickness` wide.
#[inline(always)]
pub fn groove(a: f32, b: f32, depth: f32, thickness: f32) -> f32 {
    a.max((a + depth).min(thickness - b.abs()))
}
