//! Hexagonal prism SDFs.

use glam::{Vec2, Vec3};

const SQRT_3_HALF: f32 = 0.866_025_4;

/// Hexagonal prism, circumcircle variant: `h.x` is the distance from the
/// center to a corner (in the xz plane), `h.y` the half-height along y.
#[inline(always)]
pub fn hexagon_circumcircle(p: Vec3, h: Vec2) -> f32 {
    let q = p.abs();
    (q.y - h.y).max((q.x * SQRT_3_HALF + q.z * 0.5).max(q.z) - h.x)
}

/// Hexagonal prism, incircle variant: `h.x` is the distance from the
/// center to a face.
#[inline(always)]
pub fn hexagon_incircle(p: Vec3, h: Vec2) -> f32 {
    hexagon_circumcircle(p, Vec2::new(h.x * SQRT_3_HALF, h.y))
}
