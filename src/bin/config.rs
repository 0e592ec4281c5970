//! Content Config CLI
//!
//! View and manage content pipeline configuration.

use clap::{Parser, Subcommand};
use dunjon_content::ContentConfig;

#[derive(Parser)]
#[command(name = "content-config")]
#[command(about = "View and manage content pipeline configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration
    Show {
        /// Config file to load (optional)
        #[arg(short, long)]
        config: Option<String>,

        /// Output as TOML
        #[arg(long)]
        toml: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config file
    Init {
        /// Output path (default: content.toml)
        #[arg(short, long, default_value = "content.toml")]
        output: String,
    },

    /// Validate configuration
    Validate {
        /// Config file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show { config, toml, json } => {
            let cfg = ContentConfig::load_from(config.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else if toml {
                println!("{}", ::toml::to_string_pretty(&cfg)?);
            } else {
                println!("📋 Content Pipeline Configuration\n");
                println!("Rooms:");
                println!("  Required layers:");
                for layer in cfg.required_layers().names() {
                    println!("    - {}", layer);
                }

                println!("\nEvents:");
                println!("  Schema: {:?}", cfg.events.schema_path);
                println!("  Output: {:?}", cfg.events.output_path);
                println!("  Class: {}", cfg.events.class_name);

                println!("\nReplay:");
                println!("  Engine: {}", cfg.replay.engine);
                println!("  Content root: {:?}", cfg.replay.content_root);
            }
        }

        Commands::Init { output } => {
            let cfg = ContentConfig::default();
            cfg.save(&output)?;
            println!("✅ Created config file: {}", output);
        }

        Commands::Validate { config } => match ContentConfig::load_from(config.as_deref()) {
            Ok(cfg) => {
                println!("✅ Configuration is valid");
                println!("   Required layers: {}", cfg.required_layers().names().len());
                println!("   Event schema: {:?}", cfg.events.schema_path);
            }
            Err(e) => {
                eprintln!("❌ Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
