//! Cone SDF.

use glam::{Vec2, Vec3};

/// Cone with correct distances to the tip and the base ring. Y is up,
/// the origin sits in the middle of the base circle of the given
/// `radius`, the tip at `height` above it.
#[inline(always)]
pub fn cone(p: Vec3, radius: f32, height: f32) -> f32 {
    let q = Vec2::new(Vec2::new(p.x, p.z).length(), p.y);
    let tip = q - Vec2::new(0.0, height);
    let mantle_dir = Vec2::new(height, radius).normalize();
    let mantle = tip.dot(mantle_dir);
    let mut d = mantle.max(-q.y);
    let projected = tip.dot(Vec2::new(mantle_dir.y, -mantle_dir.x));

    // distance to tip
    if q.y > height && projected < 0.0 {
        d = d.max(tip.length());
    }
    // distance to base ring
    if q.x > radius && projected > Vec2::new(height, radius).length() {
        d = d.max((q - Vec2::new(radius, 0.0)).length());
    }
    d
}
