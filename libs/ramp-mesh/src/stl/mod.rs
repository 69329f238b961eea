//! # Binary STL
//!
//! Exact little-endian encoding of a [`Mesh`](crate::Mesh) and the matching
//! reader used to verify output.
//!
//! ## Layout
//!
//! ```text
//! UINT8[80]    – Header (free text, zero padded)
//! UINT32       – Number of triangles N
//! foreach triangle
//!     REAL32[3] – Normal vector (zero unless computed)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! Total size is `84 + 50 N` bytes.

mod reader;
mod writer;

pub use reader::{decode_stl, read_stl, StlDocument};
pub use writer::{encode_stl, write_stl, write_stl_atomic};

use config::constants::{DEFAULT_STL_HEADER, STL_HEADER_SIZE, STL_PREAMBLE_SIZE, STL_TRIANGLE_SIZE};

use crate::error::ExportError;

/// Which normal is written for each facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalMode {
    /// The triangle's stored normal (zero for generated meshes).
    #[default]
    Stored,
    /// Unit normal recomputed from the winding, `(v2 - v1) × (v3 - v1)`.
    Computed,
}

/// Settings for a single export.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::stl::{ExportOptions, NormalMode};
///
/// let options = ExportOptions::new("My ramp").unwrap().with_normals(NormalMode::Computed);
/// assert_eq!(options.header(), "My ramp");
/// assert!(ExportOptions::new("x".repeat(81)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    header: String,
    normals: NormalMode,
}

impl ExportOptions {
    /// Creates options with the given header text.
    ///
    /// # Errors
    ///
    /// [`ExportError::HeaderTooLong`] if the UTF-8 text exceeds 80 bytes.
    pub fn new(header: impl Into<String>) -> Result<Self, ExportError> {
        let header = header.into();
        if header.len() > STL_HEADER_SIZE {
            return Err(ExportError::HeaderTooLong {
                len: header.len(),
                max: STL_HEADER_SIZE,
            });
        }
        Ok(Self {
            header,
            normals: NormalMode::default(),
        })
    }

    pub fn with_normals(mut self, normals: NormalMode) -> Self {
        self.normals = normals;
        self
    }

    #[inline]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[inline]
    pub fn normals(&self) -> NormalMode {
        self.normals
    }

    /// Header text zero-padded to the fixed header size.
    fn header_bytes(&self) -> [u8; STL_HEADER_SIZE] {
        let mut bytes = [0u8; STL_HEADER_SIZE];
        let text = self.header.as_bytes();
        bytes[..text.len()].copy_from_slice(text);
        bytes
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_STL_HEADER.to_string(),
            normals: NormalMode::default(),
        }
    }
}

/// Size in bytes of a binary STL holding `triangle_count` triangles.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::stl::stl_file_size;
///
/// assert_eq!(stl_file_size(152), 84 + 50 * 152);
/// ```
pub fn stl_file_size(triangle_count: u32) -> u64 {
    STL_PREAMBLE_SIZE as u64 + STL_TRIANGLE_SIZE as u64 * u64::from(triangle_count)
}

#[cfg(test)]
mod tests;
