//! # Configuration Constants
//!
//! Centralized constants for the pill ramp pipeline.
//!
//! ## Categories
//!
//! - **Ramp Defaults**: Dimensions of the reference weekly ramp (millimetres)
//! - **Binary STL**: Byte layout sizes of the output format
//! - **Output**: Default header text and file name
//! - **Precision**: Floating-point comparison tolerances

// =============================================================================
// RAMP DEFAULTS
// =============================================================================

/// Default number of channels (one per weekday).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CHANNEL_COUNT;
///
/// let dividers = DEFAULT_CHANNEL_COUNT - 1;
/// assert_eq!(dividers, 6);
/// ```
pub const DEFAULT_CHANNEL_COUNT: u32 = 7;

/// Default inner width of a single channel.
pub const DEFAULT_CHANNEL_WIDTH: f64 = 30.0;

/// Default thickness of every wall and divider.
pub const DEFAULT_WALL_THICKNESS: f64 = 2.0;

/// Default length of the sloped ramp section along +Y.
pub const DEFAULT_RAMP_LENGTH: f64 = 100.0;

/// Default length of the flat tray section along +Y.
pub const DEFAULT_TRAY_LENGTH: f64 = 60.0;

/// Default floor height at the channel exits (y = 0).
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BACK_HEIGHT, DEFAULT_FRONT_HEIGHT};
///
/// // The floor rises from the exits toward the tray
/// assert!(DEFAULT_FRONT_HEIGHT < DEFAULT_BACK_HEIGHT);
/// ```
pub const DEFAULT_FRONT_HEIGHT: f64 = 5.0;

/// Default floor height where the ramp meets the tray.
pub const DEFAULT_BACK_HEIGHT: f64 = 45.0;

/// Default height of the walls above the floor surface.
pub const DEFAULT_WALL_HEIGHT: f64 = 12.0;

// =============================================================================
// BINARY STL LAYOUT
// =============================================================================

/// Size of the free-text header at the start of a binary STL.
pub const STL_HEADER_SIZE: usize = 80;

/// Size of the little-endian `u32` triangle count following the header.
pub const STL_COUNT_SIZE: usize = 4;

/// Offset of the first triangle record.
///
/// # Example
///
/// ```rust
/// use config::constants::{STL_COUNT_SIZE, STL_HEADER_SIZE, STL_PREAMBLE_SIZE};
///
/// assert_eq!(STL_PREAMBLE_SIZE, STL_HEADER_SIZE + STL_COUNT_SIZE);
/// ```
pub const STL_PREAMBLE_SIZE: usize = STL_HEADER_SIZE + STL_COUNT_SIZE;

/// Size of one triangle record: normal (12) + three vertices (36) +
/// attribute byte count (2).
///
/// # Example
///
/// ```rust
/// use config::constants::{STL_PREAMBLE_SIZE, STL_TRIANGLE_SIZE};
///
/// fn stl_file_size(triangles: usize) -> usize {
///     STL_PREAMBLE_SIZE + STL_TRIANGLE_SIZE * triangles
/// }
/// assert_eq!(stl_file_size(12), 684);
/// ```
pub const STL_TRIANGLE_SIZE: usize = 50;

// =============================================================================
// OUTPUT DEFAULTS
// =============================================================================

/// Header text written into generated files.
///
/// Must not start with `solid`, which some readers take as the ASCII
/// STL signature.
pub const DEFAULT_STL_HEADER: &str = "Weekly Pill Ramp - Generated by Rust";

/// File name used when the CLI is given no destination.
pub const DEFAULT_OUTPUT_FILE: &str = "weekly_pill_ramp.stl";

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of generated coordinates.
///
/// Coordinates are written at `f32` precision, so comparisons after a
/// round trip need a tolerance well above `f64::EPSILON`.
///
/// # Example
///
/// ```rust
/// use config::constants::GEOMETRY_EPSILON;
///
/// let written = 226.0_f64 as f32;
/// assert!((written as f64 - 226.0).abs() < GEOMETRY_EPSILON);
/// ```
pub const GEOMETRY_EPSILON: f64 = 1e-4;
