//! Domain manipulation operators.
//!
//! These remap the query point before a primitive is evaluated: rotation,
//! periodic repetition (plain, mirrored, single-sided, clamped, polar,
//! grid), mirroring and plane reflection. Where an operator partitions
//! space into cells, it also returns an integer-valued cell tag; callers
//! may use it e.g. as a per-cell random seed to vary the shape inside each
//! cell.
//!
//! Conventions, shared by every operator here:
//!
//! - Points go in by value and come back out as the first tuple element;
//!   rebind rather than expecting in-place mutation.
//! - Cells are centered on the origin, cell 0 contains the origin, and for
//!   cell 0 the point comes back unchanged, so objects never have to be
//!   moved to fit the cell grid.
//! - Operators acting on fewer dimensions than your point take the slice
//!   you choose: pass `Vec2::new(p.x, p.z)` to repeat in the xz plane.
//! - Degenerate parameters (zero size, zero repetitions, non-unit normals)
//!   are caller preconditions, not runtime checks.

mod mirror;
mod polar;
mod reflect;
mod repeat;
mod rotate;

pub use mirror::{mirror_1d, mirror_octant};
pub use polar::repeat_polar;
pub use reflect::reflect_plane;
pub use repeat::{
    repeat_1d, repeat_2d, repeat_3d, repeat_grid_2d, repeat_interval_1d, repeat_mirror_1d,
    repeat_mirror_2d, repeat_single_1d,
};
pub use rotate::{rotate, rotate_45};
