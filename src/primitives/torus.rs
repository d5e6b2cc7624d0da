//! Torus SDF.

use glam::{Vec2, Vec3};

/// Torus in the xz plane: tube of radius `small_radius` around a circle
/// of radius `large_radius`.
#[inline(always)]
pub fn torus(p: Vec3, small_radius: f32, large_radius: f32) -> f32 {
    Vec2::new(Vec2::new(p.x, p.z).length() - large_radius, p.y).length() - small_radius
}
