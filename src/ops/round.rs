//! Rounded boolean combinations.
//!
//! The round flavor joins the two surfaces with a quarter-circle fillet
//! of radius `r`.

use glam::Vec2;

/// Union with a quarter-circle fillet of radius `r` at the joint.
///
/// Reduces to `min(a, b)` at `r = 0`; away from the joint the clamp in
/// `u` goes inactive and the plain union takes over.
#[inline(always)]
pub fn union_round(a: f32, b: f32, r: f32) -> f32 {
    let u = Vec2::new(r - a, r - b).max(Vec2::ZERO);
    r.max(a.min(b)) - u.length()
}

/// Intersection with a quarter-circle fillet of radius `r`.
#[inline(always)]
pub fn intersection_round(a: f32, b: f32, r: f32) -> f32 {
    let u = Vec2::new(r + a, r + b).max(Vec2::ZERO);
    (-r).min(a.max(b)) + u.length()
}

/// Difference with a rounded edge: `intersection_round(a, -b, r)`.
#[inline(always)]
pub fn difference_round(a: f32, b: f32, r: f32) -> f32 {
    intersection_round(a, -b, r)
}
