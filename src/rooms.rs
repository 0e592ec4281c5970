//! Room file validation
//!
//! A room file is a Tiled-style JSON export. The validator only cares about
//! its `layers` array: every room must carry the layers gameplay code looks
//! up by name (collision geometry, spawn points, hazards, doors).
//!
//! Checks run in two stages so the diagnostics stay distinct:
//! 1. Shape: the file exists, parses, and has a `layers` array.
//! 2. Compliance: every required layer name is present.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::document::{read_json, type_name};
use crate::error::{ContentError, Result};
use crate::report::Reporter;

/// Layers every room needs unless configured otherwise
pub const DEFAULT_REQUIRED_LAYERS: [&str; 5] = [
    "collision",
    "spawn_player",
    "spawn_enemies",
    "hazards",
    "doors",
];

/// The Required Layer Set.
///
/// Order is kept so missing-layer diagnostics come out in a stable order;
/// duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredLayers(Vec<String>);

impl RequiredLayers {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let layers = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self(layers)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Required layers not in `present`, in declaration order
    pub fn missing_from<'a>(&'a self, present: &HashSet<&str>) -> Vec<&'a str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|name| !present.contains(name))
            .collect()
    }
}

impl Default for RequiredLayers {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_LAYERS)
    }
}

/// A layer entry. Only the name matters here; everything else in the
/// layer (tiles, objects, properties) is left to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: Option<String>,
}

/// A shape-checked room file
#[derive(Debug, Clone)]
pub struct RoomDocument {
    pub layers: Vec<Layer>,
}

impl RoomDocument {
    /// Shape-check a parsed document. `path` is only used in diagnostics.
    pub fn from_value(path: &Path, value: &Value) -> Result<Self> {
        let layers = match value.get("layers") {
            None => {
                return Err(ContentError::InvalidStructure {
                    path: path.to_path_buf(),
                    detail: "missing 'layers' array".to_string(),
                })
            }
            Some(Value::Array(layers)) => layers,
            Some(other) => {
                return Err(ContentError::InvalidStructure {
                    path: path.to_path_buf(),
                    detail: format!("'layers' must be an array, found {}", type_name(other)),
                })
            }
        };

        let layers = layers
            .iter()
            .map(|layer| Layer {
                name: layer.get("name").and_then(Value::as_str).map(str::to_string),
            })
            .collect();

        Ok(Self { layers })
    }

    /// Load and shape-check a room file
    pub fn load(path: &Path) -> Result<Self> {
        let value = read_json(path)?;
        Self::from_value(path, &value)
    }

    /// Names of all named layers
    pub fn layer_names(&self) -> HashSet<&str> {
        self.layers.iter().filter_map(|l| l.name.as_deref()).collect()
    }
}

/// Outcome of validating one room file
#[derive(Debug)]
pub struct RoomReport {
    pub path: PathBuf,
    /// Empty when the room is compliant
    pub problems: Vec<ContentError>,
}

impl RoomReport {
    pub fn is_compliant(&self) -> bool {
        self.problems.is_empty()
    }

    /// Layers reported missing (empty for load failures)
    pub fn missing_layers(&self) -> Vec<&str> {
        self.problems
            .iter()
            .filter_map(|p| match p {
                ContentError::MissingLayer { layer, .. } => Some(layer.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Outcome of a batch run, one report per input path, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub reports: Vec<RoomReport>,
}

impl BatchReport {
    /// Logical AND of every per-file verdict
    pub fn all_compliant(&self) -> bool {
        self.reports.iter().all(RoomReport::is_compliant)
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_compliant()).count()
    }
}

/// Validates room files against an injected Required Layer Set
#[derive(Debug, Clone, Default)]
pub struct RoomValidator {
    required: RequiredLayers,
}

impl RoomValidator {
    pub fn new(required: RequiredLayers) -> Self {
        Self { required }
    }

    pub fn required(&self) -> &RequiredLayers {
        &self.required
    }

    /// Compliance check on an already-loaded room
    pub fn missing_layers<'a>(&'a self, room: &RoomDocument) -> Vec<&'a str> {
        self.required.missing_from(&room.layer_names())
    }

    /// Validate a single room file.
    ///
    /// Never fails: load errors become problems on the report. Every problem
    /// is sent to `reporter` as its own line; a compliant room gets one
    /// success line.
    pub fn validate_room(&self, path: &Path, reporter: &mut dyn Reporter) -> RoomReport {
        debug!(path = %path.display(), "validating room");

        let problems = match RoomDocument::load(path) {
            Ok(room) => {
                debug!(layers = room.layers.len(), "room loaded");
                self.missing_layers(&room)
                    .into_iter()
                    .map(|layer| ContentError::MissingLayer {
                        path: path.to_path_buf(),
                        layer: layer.to_string(),
                    })
                    .collect()
            }
            Err(e) => vec![e],
        };

        if problems.is_empty() {
            reporter.success(&format!("{} OK", path.display()));
        } else {
            for problem in &problems {
                reporter.problem(&problem.to_string());
            }
        }

        RoomReport {
            path: path.to_path_buf(),
            problems,
        }
    }

    /// Validate every path in order, without stopping at the first failure.
    ///
    /// An empty input is an argument error and touches no files.
    pub fn validate_all<P: AsRef<Path>>(
        &self,
        paths: &[P],
        reporter: &mut dyn Reporter,
    ) -> Result<BatchReport> {
        if paths.is_empty() {
            return Err(ContentError::NoInputs);
        }

        let reports = paths
            .iter()
            .map(|p| self.validate_room(p.as_ref(), reporter))
            .collect();

        Ok(BatchReport { reports })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn room(value: Value) -> RoomDocument {
        RoomDocument::from_value(Path::new("room.json"), &value).unwrap()
    }

    #[test]
    fn test_required_layers_dedup_keeps_order() {
        let required = RequiredLayers::new(["doors", "collision", "doors"]);
        assert_eq!(required.names(), ["doors", "collision"]);
    }

    #[test]
    fn test_missing_layers_exact_difference() {
        let validator = RoomValidator::default();
        let doc = room(json!({
            "layers": [
                {"name": "collision"},
                {"name": "spawn_player"},
                {"name": "spawn_enemies"},
                {"name": "decor"}
            ]
        }));
        assert_eq!(validator.missing_layers(&doc), vec!["hazards", "doors"]);
    }

    #[test]
    fn test_order_and_duplicates_do_not_matter() {
        let validator = RoomValidator::default();
        let doc = room(json!({
            "layers": [
                {"name": "doors"}, {"name": "doors"}, {"name": "hazards"},
                {"name": "spawn_enemies"}, {"name": "spawn_player"}, {"name": "collision"}
            ]
        }));
        assert!(validator.missing_layers(&doc).is_empty());
    }

    #[test]
    fn test_unnamed_layers_are_ignored() {
        let doc = room(json!({"layers": [{"type": "tilelayer"}, 7, {"name": 3}]}));
        assert_eq!(doc.layers.len(), 3);
        assert!(doc.layer_names().is_empty());
    }

    #[test]
    fn test_layers_not_an_array_is_structural() {
        let err = RoomDocument::from_value(Path::new("r.json"), &json!({"layers": "not-an-array"}))
            .unwrap_err();
        assert_eq!(err.kind(), "structure");
        assert!(err.to_string().contains("found string"));
    }

    #[test]
    fn test_layers_absent_is_structural() {
        let err = RoomDocument::from_value(Path::new("r.json"), &json!({"width": 10})).unwrap_err();
        assert!(matches!(err, ContentError::InvalidStructure { .. }));

        let err = RoomDocument::from_value(Path::new("r.json"), &json!([1, 2])).unwrap_err();
        assert!(matches!(err, ContentError::InvalidStructure { .. }));
    }

    #[test]
    fn test_custom_required_set() {
        let validator = RoomValidator::new(RequiredLayers::new(["water"]));
        let doc = room(json!({"layers": [{"name": "collision"}]}));
        assert_eq!(validator.missing_layers(&doc), vec!["water"]);
    }
}
