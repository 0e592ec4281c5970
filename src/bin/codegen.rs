//! Event Code Generator CLI
//!
//! Compiles the event schema into the GDScript events autoload.
//! Paths come from configuration (`[events]` in content.toml); with no
//! arguments this regenerates `game-godot/autoload/Events.gd` from
//! `tools/events.json`.

use clap::Parser;
use dunjon_content::events::{self, Freshness, RenderOptions};
use dunjon_content::ContentConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "event-codegen")]
#[command(about = "Generate event constants from the event schema")]
struct Cli {
    /// Config file to load (optional)
    #[arg(short, long)]
    config: Option<String>,

    /// Only verify the generated file is up to date; never writes
    #[arg(long)]
    check: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ContentConfig::load_from(cli.config.as_deref())?;
    let schema_path = &config.events.schema_path;
    let output_path = &config.events.output_path;

    let options = RenderOptions {
        class_name: config.events.class_name.clone(),
        source_label: schema_path.display().to_string(),
    };

    if cli.check {
        match events::check(schema_path, output_path, &options)? {
            Freshness::UpToDate => {
                println!("✅ {} is up to date", output_path.display());
            }
            Freshness::Missing => {
                eprintln!("❌ {} does not exist - run event-codegen", output_path.display());
                std::process::exit(1);
            }
            Freshness::Stale { diff } => {
                eprintln!("❌ {} is out of date - run event-codegen", output_path.display());
                eprintln!("{}", diff);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let summary = events::generate(schema_path, output_path, &options)?;
    println!("✅ Generated {} successfully", summary.output.display());
    println!("   Generated {} event constants", summary.constants);
    Ok(())
}
