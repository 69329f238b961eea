//! Binary STL reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use config::constants::{STL_HEADER_SIZE, STL_PREAMBLE_SIZE, STL_TRIANGLE_SIZE};
use glam::{DVec3, Vec3};

use super::stl_file_size;
use crate::error::ExportError;
use crate::mesh::{Mesh, Triangle};

/// A parsed binary STL.
#[derive(Debug, Clone, PartialEq)]
pub struct StlDocument {
    /// Header text up to the first zero byte (lossy UTF-8).
    pub header: String,
    /// Triangles in file order, normals and attributes as stored.
    pub mesh: Mesh,
}

/// Reads a binary STL file.
///
/// # Errors
///
/// [`ExportError::Io`] if the file cannot be read, otherwise as
/// [`decode_stl`].
pub fn read_stl<P: AsRef<Path>>(path: P) -> Result<StlDocument, ExportError> {
    let file = File::open(path)?;
    decode_stl(BufReader::new(file))
}

/// Decodes a binary STL from any reader.
///
/// The input must be exactly `84 + 50 N` bytes for the declared `N`.
///
/// # Errors
///
/// [`ExportError::InvalidHeader`] if the input is shorter than the header
/// and count, [`ExportError::SizeMismatch`] if it is truncated or has
/// trailing bytes.
pub fn decode_stl<R: Read>(mut reader: R) -> Result<StlDocument, ExportError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() < STL_PREAMBLE_SIZE {
        return Err(ExportError::InvalidHeader {
            expected: STL_PREAMBLE_SIZE,
            got: bytes.len(),
        });
    }

    let (header, rest) = bytes.split_at(STL_HEADER_SIZE);
    let (count_bytes, records) = rest.split_at(STL_PREAMBLE_SIZE - STL_HEADER_SIZE);
    let count = u32::from_le_bytes([count_bytes[0], count_bytes[1], count_bytes[2], count_bytes[3]]);

    let expected = stl_file_size(count);
    if bytes.len() as u64 != expected {
        return Err(ExportError::SizeMismatch {
            count,
            expected,
            got: bytes.len() as u64,
        });
    }

    let mesh = records
        .chunks_exact(STL_TRIANGLE_SIZE)
        .map(|record| Triangle {
            normal: read_vec3(&record[0..12]),
            vertices: [
                read_vec3(&record[12..24]),
                read_vec3(&record[24..36]),
                read_vec3(&record[36..48]),
            ],
            attribute: u16::from_le_bytes([record[48], record[49]]),
        })
        .collect();

    let text_len = header.iter().position(|&b| b == 0).unwrap_or(header.len());
    Ok(StlDocument {
        header: String::from_utf8_lossy(&header[..text_len]).into_owned(),
        mesh,
    })
}

fn read_vec3(buf: &[u8]) -> DVec3 {
    let component = |i: usize| f32::from_le_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]);
    Vec3::new(component(0), component(4), component(8)).as_dvec3()
}
