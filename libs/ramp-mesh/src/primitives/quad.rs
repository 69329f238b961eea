//! # Quad Primitive
//!
//! Splits a planar quadrilateral into two triangles.

use crate::mesh::Triangle;
use glam::DVec3;

/// Splits a quadrilateral given in CCW order along its p1–p3 diagonal.
///
/// Produces `(p1, p2, p3)` and `(p1, p3, p4)`, both keeping the winding
/// of the input.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::primitives::quad;
/// use glam::DVec3;
///
/// let [a, b] = quad(DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y);
/// assert_eq!(a.face_normal(), DVec3::Z);
/// assert_eq!(b.face_normal(), DVec3::Z);
/// ```
pub fn quad(p1: DVec3, p2: DVec3, p3: DVec3, p4: DVec3) -> [Triangle; 2] {
    [Triangle::new(p1, p2, p3), Triangle::new(p1, p3, p4)]
}
