//! # Solid Assembler
//!
//! Composes primitives into the ramp solid in one deterministic pass.
//!
//! ## Groups
//!
//! ```text
//! 1. ramp floor   sloped wedge, y ∈ [0, ramp_length]        (5 quads)
//! 2. tray floor   flat slab,    y ∈ [ramp_length, depth]    (5 quads)
//! 3. ramp walls   outer left, outer right, C - 1 dividers   (12 each)
//! 4. tray walls   outer left, outer right, up to the back   (12 each)
//! 5. back wall    full width, closes the tray               (12)
//! ```
//!
//! Dividers stop where the tray begins: pills are sorted while sliding down
//! the channels and pooled in the open tray.
//!
//! Coordinates: x across the channels, y from the exits (y = 0) back to the
//! tray, z up.

use glam::DVec3;
use tracing::debug;

use crate::mesh::Mesh;
use crate::params::RampParameters;
use crate::primitives::{block, hexahedron, quad};

/// Triangles in each floor section (five quads, one open face).
pub const FLOOR_TRIANGLES: usize = 10;

/// Triangles in any wall (one hexahedron).
pub const WALL_TRIANGLES: usize = 12;

/// Largest channel count whose triangle count fits the 32-bit STL count field.
pub const MAX_CHANNEL_COUNT: u32 =
    ((u32::MAX as u64 - (2 * FLOOR_TRIANGLES + 4 * WALL_TRIANGLES) as u64)
        / WALL_TRIANGLES as u64) as u32;

/// Closed-form triangle count for `channel_count` channels.
///
/// Two floor sections, `C + 1` ramp walls, two tray walls and the back wall:
/// `20 + 12 (C + 1) + 24 + 12 = 68 + 12 C`.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::assembler::expected_triangle_count;
///
/// assert_eq!(expected_triangle_count(7), 152);
/// ```
pub fn expected_triangle_count(channel_count: u32) -> usize {
    let ramp_walls = channel_count as usize + 1;
    2 * FLOOR_TRIANGLES + (ramp_walls + 3) * WALL_TRIANGLES
}

/// Builds the complete ramp solid.
pub fn assemble(params: &RampParameters) -> Mesh {
    let mut mesh = Mesh::with_capacity(expected_triangle_count(params.channel_count()));

    let groups: [(&str, fn(&RampParameters, &mut Mesh)); 5] = [
        ("ramp floor", ramp_floor),
        ("tray floor", tray_floor),
        ("ramp walls", ramp_walls),
        ("tray walls", tray_walls),
        ("back wall", back_wall),
    ];

    for (name, build) in groups {
        let before = mesh.len();
        build(params, &mut mesh);
        debug!(group = name, triangles = mesh.len() - before, "assembled group");
    }

    debug!(
        channels = params.channel_count(),
        triangles = mesh.len(),
        "assembled ramp"
    );
    mesh
}

/// Corner positions of the floor cross-section at depth `y`.
struct FloorSection {
    bottom_left: DVec3,
    bottom_right: DVec3,
    top_left: DVec3,
    top_right: DVec3,
}

impl FloorSection {
    fn at(params: &RampParameters, y: f64, height: f64) -> Self {
        let width = params.total_width();
        Self {
            bottom_left: DVec3::new(0.0, y, 0.0),
            bottom_right: DVec3::new(width, y, 0.0),
            top_left: DVec3::new(0.0, y, height),
            top_right: DVec3::new(width, y, height),
        }
    }
}

/// Sloped wedge from the exits (`front_height`) to the tray (`back_height`).
///
/// Open at its back face, which is flush with the tray floor.
pub fn ramp_floor(params: &RampParameters, mesh: &mut Mesh) {
    let front = FloorSection::at(params, 0.0, params.front_height());
    let mid = FloorSection::at(params, params.ramp_length(), params.back_height());

    mesh.extend(quad(front.bottom_left, mid.bottom_left, mid.bottom_right, front.bottom_right)); // Bottom
    mesh.extend(quad(front.top_left, front.top_right, mid.top_right, mid.top_left)); // Slope
    mesh.extend(quad(front.bottom_left, front.bottom_right, front.top_right, front.top_left)); // Front
    mesh.extend(quad(front.bottom_left, front.top_left, mid.top_left, mid.bottom_left)); // Left
    mesh.extend(quad(front.bottom_right, mid.bottom_right, mid.top_right, front.top_right)); // Right
}

/// Flat slab at `back_height` from the end of the ramp to the back.
///
/// Open at its front face, which is flush with the ramp floor.
pub fn tray_floor(params: &RampParameters, mesh: &mut Mesh) {
    let mid = FloorSection::at(params, params.ramp_length(), params.back_height());
    let back = FloorSection::at(params, params.total_depth(), params.back_height());

    mesh.extend(quad(mid.bottom_left, back.bottom_left, back.bottom_right, mid.bottom_right)); // Bottom
    mesh.extend(quad(mid.top_left, mid.top_right, back.top_right, back.top_left)); // Top
    mesh.extend(quad(back.bottom_left, back.top_left, back.top_right, back.bottom_right)); // Back
    mesh.extend(quad(mid.bottom_left, mid.top_left, back.top_left, back.bottom_left)); // Left
    mesh.extend(quad(mid.bottom_right, back.bottom_right, back.top_right, mid.top_right)); // Right
}

/// Outer walls and every divider along the sloped section.
pub fn ramp_walls(params: &RampParameters, mesh: &mut Mesh) {
    let thickness = params.wall_thickness();
    let width = params.total_width();

    ramp_wall(params, 0.0, thickness, mesh);
    ramp_wall(params, width - thickness, width, mesh);

    for x in params.divider_positions() {
        ramp_wall(params, x, x + thickness, mesh);
    }
}

/// A wall between `x_min` and `x_max` sitting on the slope and rising
/// `wall_height` above it.
pub fn ramp_wall(params: &RampParameters, x_min: f64, x_max: f64, mesh: &mut Mesh) {
    let (y_front, y_back) = (0.0, params.ramp_length());
    let (z_front, z_back) = (params.floor_height_at(y_front), params.floor_height_at(y_back));
    let lift = DVec3::new(0.0, 0.0, params.wall_height());

    let bottom = [
        DVec3::new(x_min, y_front, z_front),
        DVec3::new(x_max, y_front, z_front),
        DVec3::new(x_max, y_back, z_back),
        DVec3::new(x_min, y_back, z_back),
    ];

    mesh.extend(hexahedron([
        bottom[0],
        bottom[1],
        bottom[2],
        bottom[3],
        bottom[0] + lift,
        bottom[1] + lift,
        bottom[2] + lift,
        bottom[3] + lift,
    ]));
}

/// Outer left and right walls along the tray; no dividers.
///
/// They end where the back wall begins, so the pieces abut.
pub fn tray_walls(params: &RampParameters, mesh: &mut Mesh) {
    let thickness = params.wall_thickness();
    let width = params.total_width();
    let y_min = params.ramp_length();
    let depth = params.total_depth() - thickness - y_min;
    let right = width - thickness;

    mesh.extend(block(
        DVec3::new(0.0, y_min, params.back_height()),
        thickness,
        depth,
        params.wall_height(),
    ));
    mesh.extend(block(
        DVec3::new(right, y_min, params.back_height()),
        width - right,
        depth,
        params.wall_height(),
    ));
}

/// Full-width wall closing the far end of the tray.
///
/// Its outer face is flush with `total_depth`.
pub fn back_wall(params: &RampParameters, mesh: &mut Mesh) {
    let depth = params.total_depth();
    let y_min = depth - params.wall_thickness();

    mesh.extend(block(
        DVec3::new(0.0, y_min, params.back_height()),
        params.total_width(),
        depth - y_min,
        params.wall_height(),
    ));
}
