//! Circle line SDF.

use glam::{Vec2, Vec3};

/// A circle line of radius `r` in the xz plane — a torus of zero tube
/// radius. Subtract a tube radius to make a torus.
#[inline(always)]
pub fn circle(p: Vec3, r: f32) -> f32 {
    let l = Vec2::new(p.x, p.z).length() - r;
    Vec2::new(p.y, l).length()
}
