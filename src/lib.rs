//! Dunjon Content Tools
//!
//! Schema checks and code generation for the game's content pipeline, so
//! gameplay code and room authors share one vocabulary.
//!
//! ## Features
//!
//! - **Room Validation**: every room file must carry the required layers
//!   (`collision`, `spawn_player`, `spawn_enemies`, `hazards`, `doors`)
//! - **Event Constants**: `tools/events.json` compiles into a GDScript
//!   autoload with one constant per event plus a `PAYLOAD` shape table
//! - **Replay Runs**: launch the engine headless against a recording
//!
//! ## Layout
//!
//! ```text
//! tools/events.json            -- event schema (source of truth)
//! game-godot/
//! ├── autoload/Events.gd       -- generated, never hand-edited
//! └── data/rooms/*.json        -- room files checked by room-validator
//! ```

pub mod checksum;
pub mod config;
mod document;
pub mod error;
pub mod events;
pub mod replay;
pub mod report;
pub mod rooms;

pub use checksum::Checksum;
pub use config::ContentConfig;
pub use error::{ContentError, Result};
pub use events::{generate, load_schema, render, to_constant_name, EventSchema, RenderOptions};
pub use report::{ConsoleReporter, MemoryReporter, Reporter};
pub use rooms::{RequiredLayers, RoomDocument, RoomReport, RoomValidator};
