//! Replay Runner CLI
//!
//! Runs the engine headless with a recording and exits with the engine's
//! status.
//!
//! Usage:
//!   replay-runner recordings/2025-09-06_12-30-42.jsonl

use std::path::PathBuf;

use clap::Parser;
use dunjon_content::replay::{run_replay, ProcessEngine};
use dunjon_content::ContentConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "replay-runner")]
#[command(about = "Run the game headless against a recorded input file")]
struct Cli {
    /// Recording to replay (.jsonl)
    recording: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = ContentConfig::load()?;
    let engine = ProcessEngine::new(config.replay.engine.clone());

    let code = run_replay(&engine, &config.replay, &cli.recording)?;
    println!("[ReplayRunner] {} exited with code {}", config.replay.engine, code);
    Ok(code)
}
