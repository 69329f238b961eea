//! Command-line arguments and parameter resolution.
//!
//! Precedence, lowest first: built-in defaults, `--params` JSON file,
//! individual dimension flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_STL_HEADER};
use ramp_mesh::stl::{ExportOptions, NormalMode};
use ramp_mesh::{RampConfig, WriteMode};

/// Generate the weekly pill sorting ramp as a binary STL.
///
/// Dimensions are in millimetres. Channels run from the exits (front) up a
/// slope to an open tray at the back.
#[derive(Debug, Parser)]
#[command(name = "pill-ramp", version, long_about = None)]
pub struct Cli {
    /// Destination STL file
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// JSON file with ramp dimensions; missing fields use defaults
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Number of channels
    #[arg(long)]
    pub channels: Option<u32>,

    /// Inner width of each channel
    #[arg(long)]
    pub channel_width: Option<f64>,

    /// Thickness of walls and dividers
    #[arg(long)]
    pub wall_thickness: Option<f64>,

    /// Length of the sloped section
    #[arg(long)]
    pub ramp_length: Option<f64>,

    /// Length of the flat tray
    #[arg(long)]
    pub tray_length: Option<f64>,

    /// Floor height at the exits
    #[arg(long)]
    pub front_height: Option<f64>,

    /// Floor height at the tray
    #[arg(long)]
    pub back_height: Option<f64>,

    /// Wall height above the floor
    #[arg(long)]
    pub wall_height: Option<f64>,

    /// Text for the 80-byte file header
    #[arg(long, default_value = DEFAULT_STL_HEADER)]
    pub header: String,

    /// Write unit facet normals instead of zero vectors
    #[arg(long)]
    pub compute_normals: bool,

    /// Write to a temporary file and rename into place on success
    #[arg(long)]
    pub atomic: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merges defaults, the optional JSON file and the dimension flags.
    pub fn ramp_config(&self) -> Result<RampConfig> {
        let mut config = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid parameter file {}", path.display()))?
            }
            None => RampConfig::default(),
        };

        let overrides = [
            (&mut config.channel_width, self.channel_width),
            (&mut config.wall_thickness, self.wall_thickness),
            (&mut config.ramp_length, self.ramp_length),
            (&mut config.tray_length, self.tray_length),
            (&mut config.front_height, self.front_height),
            (&mut config.back_height, self.back_height),
            (&mut config.wall_height, self.wall_height),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(channels) = self.channels {
            config.channel_count = channels;
        }

        Ok(config)
    }

    pub fn export_options(&self) -> Result<ExportOptions> {
        let normals = if self.compute_normals {
            NormalMode::Computed
        } else {
            NormalMode::Stored
        };
        Ok(ExportOptions::new(self.header.as_str())?.with_normals(normals))
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::Direct
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
