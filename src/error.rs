//! Error types for the content pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Result type for content pipeline operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Content pipeline errors
///
/// Every variant names the offending file (when there is one) so a
/// diagnostic line can be printed straight from `Display`.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No input files given")]
    NoInputs,

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid room file structure in {}: {detail}", path.display())]
    InvalidStructure { path: PathBuf, detail: String },

    #[error("Missing 'events' collection in {}: expected an array under \"events\"", path.display())]
    MissingEvents { path: PathBuf },

    #[error("Missing layer '{layer}' in {}", path.display())]
    MissingLayer { path: PathBuf, layer: String },

    #[error("Invalid event at index {index} in {}: {detail}", path.display())]
    InvalidEvent {
        path: PathBuf,
        index: usize,
        detail: String,
    },

    #[error("Event at index {index} in {} has an empty name", path.display())]
    EmptyEventName { path: PathBuf, index: usize },

    #[error("Constant name collision: events '{first}' and '{second}' both map to {constant}")]
    ConstantCollision {
        constant: String,
        first: String,
        second: String,
    },

    #[error("Event '{event}' maps to {constant}, which the generated script reserves")]
    ReservedConstant { constant: String, event: String },

    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("Engine error: {0}")]
    Engine(String),
}

impl ContentError {
    /// Map a read failure, keeping "not found" distinct from other IO errors
    pub fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound { path }
        } else {
            ContentError::Io { path, source: err }
        }
    }

    /// Short category tag, stable across message wording changes
    pub fn kind(&self) -> &'static str {
        match self {
            ContentError::NoInputs => "argument",
            ContentError::NotFound { .. } => "not_found",
            ContentError::Syntax { .. } => "syntax",
            ContentError::InvalidStructure { .. } | ContentError::MissingEvents { .. } => {
                "structure"
            }
            ContentError::MissingLayer { .. } => "compliance",
            ContentError::InvalidEvent { .. }
            | ContentError::EmptyEventName { .. }
            | ContentError::ConstantCollision { .. }
            | ContentError::ReservedConstant { .. } => "schema",
            ContentError::Io { .. } => "io",
            ContentError::Write { .. } => "write",
            ContentError::Config(_) => "config",
            ContentError::Engine(_) => "engine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_io() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");

        assert_eq!(ContentError::from_read("a.json", missing).kind(), "not_found");
        assert_eq!(ContentError::from_read("a.json", denied).kind(), "io");
    }

    #[test]
    fn test_missing_layer_message_names_layer_and_file() {
        let err = ContentError::MissingLayer {
            path: PathBuf::from("rooms/A1.json"),
            layer: "doors".to_string(),
        };
        assert_eq!(err.to_string(), "Missing layer 'doors' in rooms/A1.json");
    }
}
