//! Room Validator CLI
//!
//! Checks room files for the layers gameplay code depends on.
//!
//! Usage:
//!   room-validator game-godot/data/rooms/A1.json [more.json ...]

use std::path::PathBuf;

use clap::Parser;
use dunjon_content::report::exit_code;
use dunjon_content::{ConsoleReporter, ContentConfig, ContentError, RequiredLayers, RoomValidator};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "room-validator")]
#[command(about = "Validate room files for required layers")]
struct Cli {
    /// Room files to check
    #[arg(allow_hyphen_values = true)]
    rooms: Vec<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(ok) => std::process::exit(exit_code(ok)),
        Err(ContentError::NoInputs) => {
            eprintln!("Usage: room-validator <room-file1> [room-file2] ...");
            eprintln!("Example: room-validator game-godot/data/rooms/A1.json");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<bool, ContentError> {
    if cli.rooms.is_empty() {
        return Err(ContentError::NoInputs);
    }

    // A broken local config must not hide per-room verdicts
    let required = match ContentConfig::load() {
        Ok(config) => config.required_layers(),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable configuration, using default layers");
            RequiredLayers::default()
        }
    };
    let validator = RoomValidator::new(required);
    let batch = validator.validate_all(&cli.rooms, &mut ConsoleReporter)?;

    tracing::debug!(
        checked = batch.reports.len(),
        failed = batch.failed(),
        "room validation finished"
    );
    Ok(batch.all_compliant())
}
