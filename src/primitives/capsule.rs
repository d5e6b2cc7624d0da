//! Capsule SDF.

use glam::{Vec2, Vec3};

/// Vertical capsule: a cylinder of radius `r` with round caps, the
/// straight section spanning `[-c, c]` along y.
#[inline(always)]
pub fn capsule(p: Vec3, r: f32, c: f32) -> f32 {
    if p.y.abs() < c {
        Vec2::new(p.x, p.z).length() - r
    } else {
        Vec3::new(p.x, p.y.abs() - c, p.z).length() - r
    }
}
