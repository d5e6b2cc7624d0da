//! Box SDFs, exact and cheap.

use glam::Vec3;

use crate::math::vmax3;

/// Exact distance to an axis-aligned box with half-extents `b`.
#[inline(always)]
pub fn box3d(p: Vec3, b: Vec3) -> f32 {
    let d = p.abs() - b;
    d.max(Vec3::ZERO).length() + vmax3(d.min(Vec3::ZERO))
}

/// Cheap box: the distance to the corners is overestimated, but only a
/// max-reduction is paid per query.
#[inline(always)]
pub fn box3d_cheap(p: Vec3, b: Vec3) -> f32 {
    vmax3(p.abs() - b)
}
