//! # Config Crate
//!
//! Centralized configuration constants for the pill ramp generator.
//! Default ramp dimensions, binary STL layout sizes and file defaults are
//! defined here so the mesh crate and the CLI agree on a single value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CHANNEL_COUNT, DEFAULT_CHANNEL_WIDTH, DEFAULT_WALL_THICKNESS};
//!
//! let channels = DEFAULT_CHANNEL_COUNT as f64;
//! let total_width = channels * DEFAULT_CHANNEL_WIDTH + (channels + 1.0) * DEFAULT_WALL_THICKNESS;
//! assert_eq!(total_width, 226.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Reference Design**: Defaults reproduce the weekly (7 channel) ramp
//! - **Format Exact**: Byte sizes match the binary STL layout

pub mod constants;
