//! Configuration management for the content pipeline
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (content.toml)
//! - Environment variables (CONTENT__*)
//!
//! ## Example config file (content.toml):
//! ```toml
//! [rooms]
//! required_layers = ["collision", "spawn_player", "spawn_enemies", "hazards", "doors"]
//!
//! [events]
//! schema_path = "tools/events.json"
//! output_path = "game-godot/autoload/Events.gd"
//! class_name = "Events"
//!
//! [replay]
//! engine = "godot"
//! content_root = "game-godot"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rooms::RequiredLayers;

/// Main configuration for the content tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Room validation settings
    #[serde(default)]
    pub rooms: RoomsConfig,

    /// Event code generation settings
    #[serde(default)]
    pub events: EventsConfig,

    /// Replay runner settings
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Room validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomsConfig {
    /// Layer names every room file must contain
    #[serde(default = "default_required_layers")]
    pub required_layers: Vec<String>,
}

/// Event code generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Canonical event schema
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,

    /// Generated GDScript file
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// `class_name` declared by the generated script
    #[serde(default = "default_class_name")]
    pub class_name: String,
}

/// Replay runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Engine executable (looked up on PATH)
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Project directory passed to the engine with `--path`
    #[serde(default = "default_content_root")]
    pub content_root: PathBuf,
}

// Default value functions
fn default_required_layers() -> Vec<String> {
    RequiredLayers::default().names().to_vec()
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("tools/events.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("game-godot/autoload/Events.gd")
}

fn default_class_name() -> String {
    "Events".to_string()
}

fn default_engine() -> String {
    "godot".to_string()
}

fn default_content_root() -> PathBuf {
    PathBuf::from("game-godot")
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            required_layers: default_required_layers(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            output_path: default_output_path(),
            class_name: default_class_name(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            content_root: default_content_root(),
        }
    }
}

impl ContentConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["content.toml", ".content.toml", "config/content.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "dunjon", "content") {
            let xdg_config = config_dir.config_dir().join("content.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // CONTENT__EVENTS__OUTPUT_PATH=... etc.
        builder = builder.add_source(
            Environment::with_prefix("CONTENT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("rooms.required_layers"),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// The Required Layer Set to inject into a validator
    pub fn required_layers(&self) -> RequiredLayers {
        RequiredLayers::new(self.rooms.required_layers.iter().cloned())
    }
}
