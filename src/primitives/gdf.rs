//! Generalized distance functions ("GDF"), after Akleman and Chen.
//!
//! Distances built from the maximum (or powered sum) of dot products
//! against a fixed set of plane normals, yielding flat-faced polyhedra.
//! See the paper at
//! <https://www.viz.tamu.edu/faculty/ergun/research/implicitmodeling/papers/sm99.pdf>.
//!
//! The direction table is public so callers can pick custom `begin..=end`
//! index ranges beyond the named polyhedra in
//! [`crate::primitives::polyhedra`]. Indices are shifted by 1 compared to
//! the paper because counting starts at zero here.

use glam::Vec3;

// Pre-normalized components: 1/√3; 1/√(1+φ²) and φ/√(1+φ²);
// 1/√(1+(φ+1)²) and (φ+1)/√(1+(φ+1)²).
const S3: f32 = 0.577_350_26;
const ICO_A: f32 = 0.525_731_1;
const ICO_B: f32 = 0.850_650_8;
const DOD_A: f32 = 0.356_822_1;
const DOD_B: f32 = 0.934_172_34;

/// The 19 unit direction vectors the polyhedral GDFs are built from:
/// cube axes `[0..=2]`, octahedron diagonals `[3..=6]`, the `(0, ±1, φ+1)`
/// family `[7..=12]` and the `(0, ±φ, 1)` family `[13..=18]`.
pub const GDF_VECTORS: [Vec3; 19] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(S3, S3, S3),
    Vec3::new(-S3, S3, S3),
    Vec3::new(S3, -S3, S3),
    Vec3::new(S3, S3, -S3),
    Vec3::new(0.0, DOD_A, DOD_B),
    Vec3::new(0.0, -DOD_A, DOD_B),
    Vec3::new(DOD_B, 0.0, DOD_A),
    Vec3::new(-DOD_B, 0.0, DOD_A),
    Vec3::new(DOD_A, DOD_B, 0.0),
    Vec3::new(-DOD_A, DOD_B, 0.0),
    Vec3::new(0.0, ICO_B, ICO_A),
    Vec3::new(0.0, -ICO_B, ICO_A),
    Vec3::new(ICO_A, 0.0, ICO_B),
    Vec3::new(-ICO_A, 0.0, ICO_B),
    Vec3::new(ICO_B, ICO_A, 0.0),
    Vec3::new(-ICO_B, ICO_A, 0.0),
];

/// Exact-exponent GDF: max of `|dot(p, v)|` over the table slice
/// `begin..=end`, minus `r`. Sharp edges, flat faces, correct distances.
#[inline(always)]
pub fn gdf(p: Vec3, r: f32, begin: usize, end: usize) -> f32 {
    let mut d: f32 = 0.0;
    for v in &GDF_VECTORS[begin..=end] {
        d = d.max(p.dot(*v).abs());
    }
    d - r
}

/// Variable-exponent GDF: powered sum instead of max.
///
/// Slow and not a correct distance, but lets objects bulge; the shape
/// approaches the exact [`gdf`] as `e` grows.
#[inline(always)]
pub fn gdf_exp(p: Vec3, r: f32, e: f32, begin: usize, end: usize) -> f32 {
    let mut d: f32 = 0.0;
    for v in &GDF_VECTORS[begin..=end] {
        d += p.dot(*v).abs().powf(e);
    }
    d.powf(e.recip()) - r
}
