//! # Hexahedron Primitive
//!
//! Six-faced prisms: axis-aligned blocks and the sheared walls that follow
//! the ramp slope.

use super::quad;
use crate::mesh::Triangle;
use glam::DVec3;

/// Triangulates a six-faced prism from its eight corners.
///
/// Corners 0..4 are the bottom ring and 4..8 the top ring, each
/// counter-clockwise seen from above, with corner `i + 4` above corner
/// `i`. Corner 0 is front-left, 1 front-right, 2 back-right, 3 back-left.
///
/// Faces are emitted bottom, top, front, right, back, left; two triangles
/// each, wound outward.
pub fn hexahedron(corners: [DVec3; 8]) -> [Triangle; 12] {
    let [v0, v1, v2, v3, v4, v5, v6, v7] = corners;

    let faces = [
        quad(v0, v3, v2, v1), // Bottom
        quad(v4, v5, v6, v7), // Top
        quad(v0, v1, v5, v4), // Front
        quad(v1, v2, v6, v5), // Right
        quad(v2, v3, v7, v6), // Back
        quad(v3, v0, v4, v7), // Left
    ];

    std::array::from_fn(|i| faces[i / 2][i % 2])
}

/// Axis-aligned prism between two opposite corners.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::primitives::cuboid;
/// use glam::DVec3;
///
/// let triangles = cuboid(DVec3::ZERO, DVec3::new(2.0, 3.0, 4.0));
/// assert_eq!(triangles.len(), 12);
/// ```
pub fn cuboid(min: DVec3, max: DVec3) -> [Triangle; 12] {
    hexahedron([
        DVec3::new(min.x, min.y, min.z),
        DVec3::new(max.x, min.y, min.z),
        DVec3::new(max.x, max.y, min.z),
        DVec3::new(min.x, max.y, min.z),
        DVec3::new(min.x, min.y, max.z),
        DVec3::new(max.x, min.y, max.z),
        DVec3::new(max.x, max.y, max.z),
        DVec3::new(min.x, max.y, max.z),
    ])
}

/// Axis-aligned block anchored at `origin` extending by (width, depth, height).
pub fn block(origin: DVec3, width: f64, depth: f64, height: f64) -> [Triangle; 12] {
    cuboid(origin, origin + DVec3::new(width, depth, height))
}
