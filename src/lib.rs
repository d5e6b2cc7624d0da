//! # distfield
//!
//! A catalog of pure functions for building signed distance fields (SDFs):
//! primitive shapes, domain-space manipulation (rotation, repetition,
//! mirroring, reflection), and combination operators (chamfered, rounded,
//! stair-stepped and columnar booleans plus non-boolean shaping ops).
//!
//! Every function is stateless and allocation-free; callers evaluate them
//! once per query point, typically from a ray marcher or spatial sampler.
//! Distances are negative inside, positive outside, zero on the surface.
//!
//! The combination operators are designed to produce correct distances or
//! distance bounds when the two surface gradients meet at roughly a right
//! angle. Beyond ~30 degrees off, the Lipschitz property no longer holds
//! and marching artifacts may appear; the worst case is close parallel
//! surfaces.
//!
//! ## Example
//!
//! ```rust
//! use distfield::prelude::*;
//! use glam::{Vec2, Vec3};
//!
//! fn scene(p: Vec3) -> f32 {
//!     // Fold space into 8 angular sectors around the y axis.
//!     let (xz, _sector) = repeat_polar(Vec2::new(p.x, p.z), 8.0);
//!     let p = Vec3::new(xz.x, p.y, xz.y);
//!
//!     let ball = sphere(p - Vec3::new(2.0, 0.0, 0.0), 0.6);
//!     let slab = box3d_cheap(p, Vec3::new(2.2, 0.2, 2.2));
//!     union_round(ball, slab, 0.15)
//! }
//!
//! assert!(scene(Vec3::new(2.0, 0.0, 0.0)) < 0.0);
//! ```
//!
//! Cell-partitioning domain operators additionally return an integer-valued
//! cell tag (as `f32`), usable e.g. as a per-cell random seed. Cell 0 always
//! contains the origin and leaves the point unchanged.
//!
//! No function validates its inputs: zero repetition sizes, non-unit plane
//! normals and the like produce NaN/Infinity through ordinary float
//! arithmetic rather than an error. These hot-path functions are kept
//! branch-free except where a branch is part of the documented shape.

#![warn(missing_docs)]

pub mod domain;
pub mod math;
pub mod ops;
pub mod primitives;

/// Convenience re-export of the whole catalog.
pub mod prelude {
    pub use crate::domain::*;
    pub use crate::math::*;
    pub use crate::ops::*;
    pub use crate::primitives::*;
}
