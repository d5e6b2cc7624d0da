//! Sphere SDF.

use glam::Vec3;

/// Exact distance to a sphere of radius `r` centered at the origin.
#[inline(always)]
pub fn sphere(p: Vec3, r: f32) -> f32 {
    p.length() - r
}
