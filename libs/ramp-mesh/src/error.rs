//! # Ramp Errors
//!
//! Error types for parameter validation, STL export and the combined
//! generation pipeline.

use thiserror::Error;

/// Errors raised while validating a [`RampConfig`](crate::RampConfig).
///
/// Validation always runs before any geometry is built or any file is
/// opened, so a `ValidationError` never leaves anything on disk.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Fewer than one channel was requested.
    #[error("Channel count must be at least 1: {0}")]
    InvalidChannelCount(u32),

    /// The assembled solid would not fit the 32-bit STL triangle count.
    #[error("Too many channels: {count} (max: {max})")]
    TooManyChannels { count: u32, max: u32 },

    /// A dimension is zero or negative.
    #[error("{name} must be positive: {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    /// A dimension is NaN or infinite.
    #[error("{name} must be finite: {value}")]
    NonFiniteDimension { name: &'static str, value: f64 },

    /// The floor would descend toward the tray instead of rising.
    #[error("Front height {front_height} exceeds back height {back_height}")]
    InvertedSlope { front_height: f64, back_height: f64 },

    /// The back wall is thicker than the tray it closes.
    #[error("Wall thickness {wall_thickness} does not fit in tray length {tray_length}")]
    WallExceedsTray { wall_thickness: f64, tray_length: f64 },

    /// A derived extent (total width or depth) is not a positive number.
    #[error("Derived {name} is not positive: {value}")]
    DegenerateExtent { name: &'static str, value: f64 },
}

/// Errors raised while writing or reading binary STL.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be opened, written or renamed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header text does not fit in the fixed-size header.
    #[error("Header too long: {len} bytes (max: {max})")]
    HeaderTooLong { len: usize, max: usize },

    /// The mesh cannot be counted by the 32-bit triangle field.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Input is shorter than the header plus triangle count.
    #[error("Invalid STL header: expected {expected} bytes, got {got}")]
    InvalidHeader { expected: usize, got: usize },

    /// Input length disagrees with the declared triangle count.
    #[error("STL size mismatch: {count} triangles need {expected} bytes, got {got}")]
    SizeMismatch { count: u32, expected: u64, got: u64 },
}

/// Errors from the full generate-and-write pipeline.
#[derive(Debug, Error)]
pub enum RampError {
    /// Parameters were rejected before generation started.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The mesh could not be written.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl ExportError {
    /// Returns true if this error originated in the file system.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
