//! Tongue shaping operator.

/// Attach a carpenter-style tongue to `a` along the surface of `b`,
/// `depth` tall and `2 * thickness` wide — the raised counterpart of
/// [`crate::ops::groove`].
#[inline(always)]
pub fn tongue(a: f32, b: f32, depth: f32, thickness: f32) -> f32 {
    a.min((a - depth).max(b.abs() - thickness))
}
