//! Named polyhedra over the GDF direction table.
//!
//! Each shape is a fixed index range into
//! [`GDF_VECTORS`](crate::primitives::GDF_VECTORS); the `_exp` variants trade
//! exact distances for bulging faces.
//!
//! Drivers sometimes refuse to unroll the table loop, which makes the
//! larger ranges slow; a specialized per-shape implementation can beat
//! these in all cases.

use glam::Vec3;

use super::gdf::{gdf, gdf_exp};

/// Octahedron with circumradius `r`.
#[inline(always)]
pub fn octahedron(p: Vec3, r: f32) -> f32 {
    gdf(p, r, 3, 6)
}

/// Dodecahedron with inradius `r`.
#[inline(always)]
pub fn dodecahedron(p: Vec3, r: f32) -> f32 {
    gdf(p, r, 13, 18)
}

/// Icosahedron with inradius `r`.
#[inline(always)]
pub fn icosahedron(p: Vec3, r: f32) -> f32 {
    gdf(p, r, 3, 12)
}

/// Truncated octahedron with inradius `r`.
#[inline(always)]
pub fn truncated_octahedron(p: Vec3, r: f32) -> f32 {
    gdf(p, r, 0, 6)
}

/// Truncated icosahedron (the football) with inradius `r`.
#[inline(always)]
pub fn truncated_icosahedron(p: Vec3, r: f32) -> f32 {
    gdf(p, r, 3, 18)
}

/// Bulging octahedron with exponent `e`.
#[inline(always)]
pub fn octahedron_exp(p: Vec3, r: f32, e: f32) -> f32 {
    gdf_exp(p, r, e, 3, 6)
}

/// Bulging dodecahedron with exponent `e`.
#[inline(always)]
pub fn dodecahedron_exp(p: Vec3, r: f32, e: f32) -> f32 {
    gdf_exp(p, r, e, 13, 18)
}

/// Bulging icosahedron with exponent `e`.
#[inline(always)]
pub fn icosahedron_exp(p: Vec3, r: f32, e: f32) -> f32 {
    gdf_exp(p, r, e, 3, 12)
}

/// Bulging truncated octahedron with exponent `e`.
#[inline(always)]
pub fn truncated_octahedron_exp(p: Vec3, r: f32, e: f32) -> f32 {
    gdf_exp(p, r, e, 0, 6)
}

/// Bulging truncated icosahedron with exponent `e`.
#[inline(always)]
pub fn truncated_icosahedron_exp(p: Vec3, r: f32, e: f32) -> f32 {
    gdf_exp(p, r, e, 3, 18)
}
