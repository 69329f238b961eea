//! Tests for binary STL encoding and decoding.

use super::*;
use crate::mesh::{Mesh, Triangle};
use glam::DVec3;

fn single_triangle() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.append(Triangle::new(
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(4.0, 5.0, 6.0),
        DVec3::new(7.0, 8.0, 10.0),
    ));
    mesh
}

fn encode(mesh: &Mesh, options: &ExportOptions) -> Vec<u8> {
    let mut bytes = Vec::new();
    encode_stl(mesh, &mut bytes, options).unwrap();
    bytes
}

fn f32_at(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

// =============================================================================
// ENCODING
// =============================================================================

#[test]
fn test_empty_mesh_is_preamble_only() {
    let bytes = encode(&Mesh::new(), &ExportOptions::default());
    assert_eq!(bytes.len(), 84);
    assert_eq!(&bytes[80..84], &[0, 0, 0, 0]);
}

#[test]
fn test_header_is_zero_padded() {
    let bytes = encode(&Mesh::new(), &ExportOptions::new("abc").unwrap());
    assert_eq!(&bytes[..3], b"abc");
    assert!(bytes[3..80].iter().all(|&b| b == 0));
}

#[test]
fn test_default_header_text() {
    let bytes = encode(&Mesh::new(), &ExportOptions::default());
    let text = config::constants::DEFAULT_STL_HEADER.as_bytes();
    assert_eq!(&bytes[..text.len()], text);
}

#[test]
fn test_full_length_header_accepted() {
    let header = "h".repeat(80);
    let bytes = encode(&Mesh::new(), &ExportOptions::new(header.clone()).unwrap());
    assert_eq!(&bytes[..80], header.as_bytes());
}

#[test]
fn test_header_too_long_rejected() {
    let err = ExportOptions::new("h".repeat(81)).unwrap_err();
    assert!(matches!(err, ExportError::HeaderTooLong { len: 81, max: 80 }));
}

#[test]
fn test_triangle_record_layout() {
    let bytes = encode(&single_triangle(), &ExportOptions::default());
    assert_eq!(bytes.len(), 84 + 50);
    assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]), 1);

    // Normal
    for i in 0..3 {
        assert_eq!(f32_at(&bytes, 84 + 4 * i), 0.0);
    }
    // Vertices
    let expected = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0];
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(f32_at(&bytes, 84 + 12 + 4 * i), *value);
    }
    // Attribute
    assert_eq!(&bytes[84 + 48..84 + 50], &[0, 0]);
}

#[test]
fn test_computed_normals() {
    let mut mesh = Mesh::new();
    mesh.append(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y));
    let options = ExportOptions::default().with_normals(NormalMode::Computed);
    let bytes = encode(&mesh, &options);
    assert_eq!(f32_at(&bytes, 84), 0.0);
    assert_eq!(f32_at(&bytes, 88), 0.0);
    assert_eq!(f32_at(&bytes, 92), 1.0);
}

#[test]
fn test_stored_attribute_is_written() {
    let mut mesh = single_triangle();
    let mut tri = mesh.triangles()[0];
    tri.attribute = 0x1234;
    mesh.append(tri);
    let bytes = encode(&mesh, &ExportOptions::default());
    assert_eq!(&bytes[84 + 50 + 48..84 + 50 + 50], &[0x34, 0x12]);
}

#[test]
fn test_encoding_is_deterministic() {
    let mesh = single_triangle();
    let options = ExportOptions::default();
    assert_eq!(encode(&mesh, &options), encode(&mesh, &options));
}

#[test]
fn test_stl_file_size() {
    assert_eq!(stl_file_size(0), 84);
    assert_eq!(stl_file_size(1), 134);
    assert_eq!(stl_file_size(u32::MAX), 84 + 50 * u32::MAX as u64);
}

// =============================================================================
// DECODING
// =============================================================================

#[test]
fn test_decode_roundtrip() {
    let mesh = single_triangle();
    let bytes = encode(&mesh, &ExportOptions::new("round trip").unwrap());
    let doc = decode_stl(bytes.as_slice()).unwrap();
    assert_eq!(doc.header, "round trip");
    assert_eq!(doc.mesh, mesh);
}

#[test]
fn test_decode_short_input() {
    let err = decode_stl(&[0u8; 40][..]).unwrap_err();
    assert!(matches!(err, ExportError::InvalidHeader { expected: 84, got: 40 }));
}

#[test]
fn test_decode_truncated_records() {
    let mut bytes = encode(&single_triangle(), &ExportOptions::default());
    bytes.truncate(bytes.len() - 1);
    let err = decode_stl(bytes.as_slice()).unwrap_err();
    assert!(matches!(
        err,
        ExportError::SizeMismatch { count: 1, expected: 134, got: 133 }
    ));
}

#[test]
fn test_decode_trailing_bytes() {
    let mut bytes = encode(&single_triangle(), &ExportOptions::default());
    bytes.push(0);
    let err = decode_stl(bytes.as_slice()).unwrap_err();
    assert!(matches!(err, ExportError::SizeMismatch { got: 135, .. }));
}
