//! Plane reflection.

use glam::Vec3;

use crate::math::sgn;

/// Reflect space at the plane `dot(p, normal) + offset = 0`.
///
/// Only points on the negative side of the plane are reflected; the
/// positive side (and the plane itself) passes through unchanged.
/// `normal` must be unit length — a caller precondition, not checked.
/// Returns the (possibly reflected) point and the pre-reflection side
/// as `±1`.
#[inline(always)]
pub fn reflect_plane(p: Vec3, normal: Vec3, offset: f32) -> (Vec3, f32) {
    let t = p.dot(normal) + offset;
    let p = if t < 0.0 { p - 2.0 * t * normal } else { p };
    (p, sgn(t))
}
