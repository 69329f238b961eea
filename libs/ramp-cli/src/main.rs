//! # pill-ramp
//!
//! Generates the multi-channel pill sorting ramp and writes it as binary
//! STL.
//!
//! ```text
//! pill-ramp [OUTPUT] [--params FILE] [--channels N] ... [--atomic]
//! ```

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = cli.ramp_config()?;
    let options = cli.export_options()?;
    tracing::debug!(?config, output = %cli.output.display(), "resolved ramp parameters");

    let report = ramp_mesh::generate_to_file(&config, &cli.output, &options, cli.write_mode())
        .with_context(|| format!("failed to generate {}", cli.output.display()))?;

    let (_, max) = report.bounding_box;
    println!(
        "Saved {} triangles ({} bytes, {:.1} x {:.1} x {:.1}) to {}",
        report.triangle_count,
        report.bytes_written,
        max.x,
        max.y,
        max.z,
        report.path.display()
    );
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
