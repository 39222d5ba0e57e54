//! Part geometry and mass calculation.
//!
//! Every function here is total: missing links or dimensions give a zero
//! result instead of an error.

mod geometry;
mod mass;

pub use geometry::PartGeometry;
pub use mass::*;
