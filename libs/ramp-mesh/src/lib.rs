//! # Ramp Mesh
//!
//! Parametric mesh generation for a multi-channel pill sorting ramp: a
//! sloped floor split into channels by dividers, draining an open flat tray.
//! The solid is written as binary STL for slicers.
//!
//! ## Architecture
//!
//! ```text
//! RampConfig → validate() → RampParameters → assemble() → Mesh → stl::write_stl() → file
//! ```
//!
//! Generation is a single deterministic pass; the only side effect is the
//! final file write.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ramp_mesh::{generate_to_file, RampConfig, WriteMode};
//! use ramp_mesh::stl::ExportOptions;
//!
//! let report = generate_to_file(
//!     &RampConfig::default(),
//!     "weekly_pill_ramp.stl",
//!     &ExportOptions::default(),
//!     WriteMode::Direct,
//! )?;
//! assert_eq!(report.triangle_count, 152);
//! # Ok::<(), ramp_mesh::RampError>(())
//! ```

pub mod assembler;
pub mod error;
pub mod mesh;
pub mod params;
pub mod primitives;
pub mod stl;

use std::path::{Path, PathBuf};

use glam::DVec3;
use tracing::info;

pub use assembler::{assemble, expected_triangle_count, MAX_CHANNEL_COUNT};
pub use error::{ExportError, RampError, ValidationError};
pub use mesh::{Mesh, Triangle};
pub use params::{RampConfig, RampParameters};

use stl::ExportOptions;

/// How the destination file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write straight into the destination; a failure may leave a partial file.
    #[default]
    Direct,
    /// Stage in a temporary file and rename on success.
    Atomic,
}

/// Summary of a completed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub triangle_count: u32,
    pub bytes_written: u64,
    /// (min, max) corners of the generated solid
    pub bounding_box: (DVec3, DVec3),
}

/// Builds the ramp mesh for validated parameters.
pub fn generate(params: &RampParameters) -> Mesh {
    assemble(params)
}

/// Validates `config`, builds the ramp and writes it to `path`.
///
/// Validation happens before the destination is opened, so invalid
/// parameters never create or truncate a file.
///
/// # Errors
///
/// [`RampError::Validation`] for rejected parameters,
/// [`RampError::Export`] if the file cannot be written.
pub fn generate_to_file<P: AsRef<Path>>(
    config: &RampConfig,
    path: P,
    options: &ExportOptions,
    mode: WriteMode,
) -> Result<GenerationReport, RampError> {
    let params = config.validate()?;
    let mesh = generate(&params);
    let path = path.as_ref();

    let triangle_count = match mode {
        WriteMode::Direct => stl::write_stl(&mesh, path, options)?,
        WriteMode::Atomic => stl::write_stl_atomic(&mesh, path, options)?,
    };

    let report = GenerationReport {
        path: path.to_path_buf(),
        triangle_count,
        bytes_written: stl::stl_file_size(triangle_count),
        bounding_box: mesh.bounding_box(),
    };
    info!(
        channels = params.channel_count(),
        triangles = report.triangle_count,
        bytes = report.bytes_written,
        "generated pill ramp"
    );
    Ok(report)
}
