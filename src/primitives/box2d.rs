//! 2D box and corner SDFs (endless along the unused axis).

use glam::Vec2;

use crate::math::vmax2;

/// Exact distance to a 2D box with half-extents `b` — an endless box when
/// used with two components of a 3D point.
#[inline(always)]
pub fn box2d(p: Vec2, b: Vec2) -> f32 {
    let d = p.abs() - b;
    d.max(Vec2::ZERO).length() + vmax2(d.min(Vec2::ZERO))
}

/// Cheap 2D box: corner distances overestimated.
#[inline(always)]
pub fn box2d_cheap(p: Vec2, b: Vec2) -> f32 {
    vmax2(p.abs() - b)
}

/// Endless corner: the region `x <= 0 || y <= 0` is inside.
#[inline(always)]
pub fn corner(p: Vec2) -> f32 {
    p.max(Vec2::ZERO).length() + vmax2(p.min(Vec2::ZERO))
}
