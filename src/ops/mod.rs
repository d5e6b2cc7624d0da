//! Object combination operators.
//!
//! All operators here merge two already-evaluated distances `a` and `b`
//! into one. The boolean trio is union `min(a, b)`, intersection
//! `max(a, b)` and difference `max(a, -b)`; the flavored families
//! (chamfer, round, columns, stairs, soft) shape the edge where the two
//! surfaces meet instead of leaving it sharp.
//!
//! The construction treats the pair `(a, b)` as a local 2D coordinate
//! system with the surface intersection at its origin and evaluates a 2D
//! distance function there. The results are correct distances or distance
//! bounds — unlike the popular "smooth minimum" — provided the two
//! gradients meet at roughly a right angle; expect artifacts beyond ~30
//! degrees off, worst of all for close parallel surfaces.
//!
//! The feature radius `r` should stay much smaller than the objects
//! involved. `r` and the step/column count `n` are never validated; `n <=
//! 1` on the columns/stairs operators is a precondition violation that
//! yields degenerate shapes, not an error.
//!
//! `pipe`, `engrave`, `groove` and `tongue` are not booleans: they modify
//! one object permanently using a second one as a tool.

mod chamfer;
mod columns;
mod engrave;
mod groove;
mod pipe;
mod round;
mod sharp;
mod soft;
mod stairs;
mod tongue;

pub use chamfer::{difference_chamfer, intersection_chamfer, union_chamfer};
pub use columns::{difference_columns, intersection_columns, union_columns};
pub use engrave::engrave;
pub use groove::groove;
pub use pipe::pipe;
pub use round::{difference_round, intersection_round, union_round};
pub use sharp::{sharp_difference, sharp_intersection, sharp_union};
pub use soft::union_soft;
pub use stairs::{difference_stairs, intersection_stairs, union_stairs};
pub use tongue::tongue;
