//! # Primitives
//!
//! Pure functions turning quadrilaterals and six-faced prisms into
//! triangles. No planarity or winding validation is performed; callers
//! supply counter-clockwise, planar faces.

pub mod hexahedron;
pub mod quad;

pub use hexahedron::{block, cuboid, hexahedron};
pub use quad::quad;
