//! Plain boolean combinations with sharp edges.

/// Union: the surface of either object. `min(a, b)`.
#[inline(always)]
pub fn sharp_union(a: f32, b: f32) -> f32 {
    a.min(b)
}

/// Intersection: only where both objects overlap. `max(a, b)`.
#[inline(always)]
pub fn sharp_intersection(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// Difference: `a` with `b` cut away. `max(a, -b)`.
#[inline(always)]
pub fn sharp_difference(a: f32, b: f32) -> f32 {
    a.max(-b)
}
