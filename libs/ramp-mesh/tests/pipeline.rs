//! End-to-end tests: parameters → mesh → file on disk → parsed back.

use approx::assert_relative_eq;
use config::constants::GEOMETRY_EPSILON;
use glam::DVec3;
use ramp_mesh::stl::{read_stl, stl_file_size, write_stl, ExportOptions, NormalMode};
use ramp_mesh::{
    assemble, expected_triangle_count, generate_to_file, ExportError, RampConfig, RampError,
    RampParameters, ValidationError, WriteMode,
};
use tempfile::tempdir;

fn config_with_channels(channel_count: u32) -> RampConfig {
    RampConfig {
        channel_count,
        ..RampConfig::default()
    }
}

fn sorted_vertex_bits(vertices: impl Iterator<Item = DVec3>) -> Vec<[u32; 3]> {
    let mut bits: Vec<[u32; 3]> = vertices
        .map(|v| {
            let v = v.as_vec3();
            [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
        })
        .collect();
    bits.sort_unstable();
    bits
}

#[test]
fn file_size_matches_triangle_count() {
    let dir = tempdir().unwrap();

    for channels in [1, 2, 7] {
        let path = dir.path().join(format!("ramp_{channels}.stl"));
        let report = generate_to_file(
            &config_with_channels(channels),
            &path,
            &ExportOptions::default(),
            WriteMode::Direct,
        )
        .unwrap();

        let expected = expected_triangle_count(channels) as u32;
        assert_eq!(report.triangle_count, expected);
        assert_eq!(report.bytes_written, 84 + 50 * u64::from(expected));

        let on_disk = std::fs::metadata(&path).unwrap().len();
        assert_eq!(on_disk, stl_file_size(report.triangle_count));
    }
}

/// Seven 30 mm channels with 2 mm walls: 226 mm wide.
#[test]
fn reference_ramp_is_226_wide() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weekly.stl");
    let config = RampConfig {
        channel_count: 7,
        channel_width: 30.0,
        wall_thickness: 2.0,
        ..RampConfig::default()
    };

    let report =
        generate_to_file(&config, &path, &ExportOptions::default(), WriteMode::Direct).unwrap();
    assert_eq!(report.triangle_count, 152);
    assert_eq!(report.bounding_box.1.x, 226.0);

    let doc = read_stl(&path).unwrap();
    let (min, max) = doc.mesh.bounding_box();
    assert_eq!(min, DVec3::ZERO);
    assert_relative_eq!(max.x, 226.0, epsilon = GEOMETRY_EPSILON);
    assert_relative_eq!(max.y, 160.0, epsilon = GEOMETRY_EPSILON);
    assert_relative_eq!(max.z, 57.0, epsilon = GEOMETRY_EPSILON);
}

#[test]
fn single_channel_has_no_dividers() {
    let params = config_with_channels(1).validate().unwrap();
    let mesh = assemble(&params);
    // 20 floor + 2 ramp walls + 2 tray walls + back wall
    assert_eq!(mesh.len(), 20 + 2 * 12 + 2 * 12 + 12);
}

#[test]
fn invalid_parameters_never_touch_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.stl");

    let err = generate_to_file(
        &config_with_channels(0),
        &path,
        &ExportOptions::default(),
        WriteMode::Direct,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        RampError::Validation(ValidationError::InvalidChannelCount(0))
    ));
    assert!(!path.exists());
}

#[test]
fn invalid_parameters_keep_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.stl");
    std::fs::write(&path, b"keep me").unwrap();

    let config = RampConfig {
        wall_height: -1.0,
        ..RampConfig::default()
    };
    let result = generate_to_file(&config, &path, &ExportOptions::default(), WriteMode::Direct);
    assert!(result.is_err());
    assert_eq!(std::fs::read(&path).unwrap(), b"keep me");
}

#[test]
fn roundtrip_recovers_vertices() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roundtrip.stl");
    let config = RampConfig {
        channel_count: 5,
        channel_width: 21.7,
        wall_thickness: 1.3,
        ..RampConfig::default()
    };
    let mesh = assemble(&config.validate().unwrap());

    let count = write_stl(&mesh, &path, &ExportOptions::default()).unwrap();
    let doc = read_stl(&path).unwrap();

    assert_eq!(count as usize, mesh.len());
    assert_eq!(doc.mesh.len(), mesh.len());
    assert_eq!(doc.header, config::constants::DEFAULT_STL_HEADER);
    assert_eq!(
        sorted_vertex_bits(doc.mesh.vertices()),
        sorted_vertex_bits(mesh.vertices())
    );
    assert!(doc.mesh.iter().all(|t| t.normal == DVec3::ZERO && t.attribute == 0));
}

#[test]
fn roundtrip_preserves_triangle_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("order.stl");
    let mesh = assemble(&RampParameters::reference());
    write_stl(&mesh, &path, &ExportOptions::default()).unwrap();

    let doc = read_stl(&path).unwrap();
    for (written, read) in mesh.iter().zip(doc.mesh.iter()) {
        for (a, b) in written.vertices.iter().zip(read.vertices.iter()) {
            assert!(a.distance(*b) < GEOMETRY_EPSILON);
        }
    }
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.stl");
    let b = dir.path().join("b.stl");
    let options = ExportOptions::default();

    generate_to_file(&RampConfig::default(), &a, &options, WriteMode::Direct).unwrap();
    generate_to_file(&RampConfig::default(), &b, &options, WriteMode::Atomic).unwrap();

    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn computed_normals_are_unit_and_outward() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("normals.stl");
    let options = ExportOptions::default().with_normals(NormalMode::Computed);
    generate_to_file(&RampConfig::default(), &path, &options, WriteMode::Direct).unwrap();

    let doc = read_stl(&path).unwrap();
    for tri in doc.mesh.iter() {
        assert_relative_eq!(tri.normal.length(), 1.0, epsilon = GEOMETRY_EPSILON);
        let derived = tri.face_normal();
        assert!(tri.normal.dot(derived) > 0.99);
    }
}

#[test]
fn custom_header_is_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("header.stl");
    let options = ExportOptions::new("Custom ramp").unwrap();
    generate_to_file(&RampConfig::default(), &path, &options, WriteMode::Direct).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..11], b"Custom ramp");
    assert_eq!(read_stl(&path).unwrap().header, "Custom ramp");
}

#[test]
fn atomic_write_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("replace.stl");
    std::fs::write(&path, b"old contents").unwrap();

    let report = generate_to_file(
        &RampConfig::default(),
        &path,
        &ExportOptions::default(),
        WriteMode::Atomic,
    )
    .unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), report.bytes_written);
    // Only the destination remains; the staging file was renamed away
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("ramp.stl");

    for mode in [WriteMode::Direct, WriteMode::Atomic] {
        let err = generate_to_file(&RampConfig::default(), &path, &ExportOptions::default(), mode)
            .unwrap_err();
        match err {
            RampError::Export(export) => assert!(export.is_io(), "{export}"),
            other => panic!("expected export error, got {other:?}"),
        }
        assert!(!path.exists());
    }
}

#[test]
fn read_rejects_non_stl() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.stl");
    std::fs::write(&path, b"solid not really binary").unwrap();

    let err = read_stl(&path).unwrap_err();
    assert!(matches!(err, ExportError::InvalidHeader { .. }));
}
