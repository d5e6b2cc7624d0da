//! Planar rotation.
//!
//! Rotates in a plane perpendicular to a coordinate axis. Read
//! `rotate(Vec2::new(p.x, p.z), a)` as "rotate x towards z by a".

use glam::Vec2;

/// Rotate `p` by `angle` radians around the implicit third axis.
///
/// Exact, no edge cases. Fast when `angle` is a compile-time constant,
/// still practical when it is not.
#[inline(always)]
pub fn rotate(p: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    c * p + s * Vec2::new(p.y, -p.x)
}

/// Fixed 45-degree rotation, cheaper than [`rotate`] with a variable angle.
#[inline(always)]
pub fn rotate_45(p: Vec2) -> Vec2 {
    (p + Vec2::new(p.y, -p.x)) * std::f32::consts::FRAC_1_SQRT_2
}
