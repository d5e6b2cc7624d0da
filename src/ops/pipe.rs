//! Pipe shaping operator.

use glam::Vec2;

/// Cylindrical pipe of radius `r` running along the intersection curve of
/// the two surfaces.
///
/// Not a boolean: neither input object remains, only the pipe. The
/// distance grows without bound away from the intersection curve, so the
/// result is intentionally not a bounded object.
#[inline(always)]
pub fn pipe(a: f32, b: f32, r: f32) -> f32 {
    Vec2::new(a, b).length() - r
}
