//! # Mesh Buffer
//!
//! Append-only triangle soup. Vertices are stored per triangle with no
//! shared indexing; insertion order is the on-disk order.

use glam::DVec3;

/// A single facet: three vertices, a normal and the 16-bit attribute field.
///
/// Vertices are listed counter-clockwise seen from outside, so
/// `(v2 - v1) × (v3 - v1)` points outward. Generated triangles carry a
/// zero normal and a zero attribute; consumers recompute normals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triangle {
    /// Corner positions (f64 for precision, narrowed to f32 on export)
    pub vertices: [DVec3; 3],
    /// Stored facet normal
    pub normal: DVec3,
    /// Attribute byte count
    pub attribute: u16,
}

impl Triangle {
    /// Creates a triangle with a zero normal and zero attribute.
    pub fn new(v1: DVec3, v2: DVec3, v3: DVec3) -> Self {
        Self {
            vertices: [v1, v2, v3],
            normal: DVec3::ZERO,
            attribute: 0,
        }
    }

    /// Unit normal derived from the winding, or zero for a degenerate facet.
    pub fn face_normal(&self) -> DVec3 {
        self.area_vector().normalize_or_zero()
    }

    /// `(v2 - v1) × (v3 - v1)`; its length is twice the area.
    pub fn area_vector(&self) -> DVec3 {
        let [v1, v2, v3] = self.vertices;
        (v2 - v1).cross(v3 - v1)
    }

    /// Area of the facet.
    pub fn area(&self) -> f64 {
        self.area_vector().length() * 0.5
    }
}

/// An ordered sequence of triangles built in one generation pass.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::{Mesh, Triangle};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.append(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y));
/// assert_eq!(mesh.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Adds a triangle at the end.
    #[inline]
    pub fn append(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles in insertion order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Iterates every vertex of every triangle.
    pub fn vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.triangles.iter().flat_map(|t| t.vertices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or (ZERO, ZERO) for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut vertices = self.vertices();
        let Some(first) = vertices.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Positive for closed, outward-wound shells. Overlapping pieces are
    /// counted once each.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let [v1, v2, v3] = t.vertices;
                v1.dot(v2.cross(v3))
            })
            .sum::<f64>()
            / 6.0
    }
}

impl Extend<Triangle> for Mesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
