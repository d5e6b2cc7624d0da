//! Primitive distance functions.
//!
//! Closed-form signed distances to canonical shapes. Conventions: the
//! first argument is always the query point `p`, shapes are centered at
//! the origin, and where a shape has an intrinsic "up" the y axis is up.
//! Move a shape by offsetting `p` before the call.

mod blob;
mod box2d;
mod box3d;
mod capsule;
mod circle;
mod cone;
mod cylinder;
mod disc;
mod gdf;
mod hex_prism;
mod plane;
mod polyhedra;
mod sphere;
mod torus;

pub use blob::blob;
pub use box2d::{box2d, box2d_cheap, corner};
pub use box3d::{box3d, box3d_cheap};
pub use capsule::capsule;
pub use circle::circle;
pub use cone::cone;
pub use cylinder::cylinder;
pub use disc::disc;
pub use gdf::{gdf, gdf_exp, GDF_VECTORS};
pub use hex_prism::{hexagon_circumcircle, hexagon_incircle};
pub use plane::plane;
pub use polyhedra::{
    dodecahedron, dodecahedron_exp, icosahedron, icosahedron_exp, octahedron, octahedron_exp,
    truncated_icosahedron, truncated_icosahedron_exp, truncated_octahedron,
    truncated_octahedron_exp,
};
pub use sphere::sphere;
pub use torus::torus;
