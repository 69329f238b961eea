//! Binary STL writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{ExportOptions, NormalMode};
use crate::error::ExportError;
use crate::mesh::Mesh;

/// Encodes `mesh` into `writer` in a single forward pass.
///
/// Returns the triangle count written to the header.
///
/// # Errors
///
/// [`ExportError::TooManyTriangles`] before anything is written if the count
/// does not fit in 32 bits; [`ExportError::Io`] if the writer fails.
pub fn encode_stl<W: Write>(
    mesh: &Mesh,
    writer: &mut W,
    options: &ExportOptions,
) -> Result<u32, ExportError> {
    let count = u32::try_from(mesh.len()).map_err(|_| ExportError::TooManyTriangles {
        count: mesh.len(),
        max: u32::MAX as usize,
    })?;

    writer.write_all(&options.header_bytes())?;
    writer.write_all(&count.to_le_bytes())?;

    for triangle in mesh {
        let normal = match options.normals() {
            NormalMode::Stored => triangle.normal,
            NormalMode::Computed => triangle.face_normal(),
        };

        write_vec3(writer, normal)?;
        for vertex in triangle.vertices {
            write_vec3(writer, vertex)?;
        }
        writer.write_all(&triangle.attribute.to_le_bytes())?;
    }

    Ok(count)
}

/// Writes `mesh` to `path`, replacing any existing file.
///
/// The file handle is released on every path. If a write fails partway
/// through, the partial file is left on disk; use [`write_stl_atomic`] when
/// that matters.
///
/// # Example
///
/// ```rust,no_run
/// use ramp_mesh::{assemble, RampParameters};
/// use ramp_mesh::stl::{write_stl, ExportOptions};
///
/// let mesh = assemble(&RampParameters::reference());
/// let count = write_stl(&mesh, "weekly_pill_ramp.stl", &ExportOptions::default())?;
/// assert_eq!(count, 152);
/// # Ok::<(), ramp_mesh::ExportError>(())
/// ```
pub fn write_stl<P: AsRef<Path>>(
    mesh: &Mesh,
    path: P,
    options: &ExportOptions,
) -> Result<u32, ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let count = encode_stl(mesh, &mut writer, options)?;
    writer.flush()?;

    info!(path = %path.display(), triangles = count, "wrote binary STL");
    Ok(count)
}

/// Writes `mesh` to a temporary file beside `path` and renames it into
/// place only after every byte is flushed.
///
/// On failure the destination is untouched and the temporary file is
/// removed.
pub fn write_stl_atomic<P: AsRef<Path>>(
    mesh: &Mesh,
    path: P,
    options: &ExportOptions,
) -> Result<u32, ExportError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    debug!(temp = %temp.path().display(), "staging binary STL");

    let count = {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let count = encode_stl(mesh, &mut writer, options)?;
        writer.flush()?;
        count
    };
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| ExportError::Io(e.error))?;

    info!(path = %path.display(), triangles = count, "wrote binary STL atomically");
    Ok(count)
}

/// Writes three little-endian `f32` components.
fn write_vec3<W: Write>(writer: &mut W, v: DVec3) -> Result<(), ExportError> {
    let mut buf = [0u8; 12];
    for (chunk, value) in buf.chunks_exact_mut(4).zip(v.as_vec3().to_array()) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    writer.write_all(&buf)?;
    Ok(())
}
