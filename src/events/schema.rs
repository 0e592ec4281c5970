//! Event schema document

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::document::{read_json, type_name};
use crate::error::{ContentError, Result};

/// One declared payload field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadField {
    pub name: String,
    /// Engine type name, e.g. "float" or "Vector2"
    pub type_tag: String,
}

/// One gameplay event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefinition {
    pub name: String,
    /// Fields in schema order; empty when the schema omits `payload`
    pub payload: Vec<PayloadField>,
}

impl EventDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.payload.push(PayloadField {
            name: name.into(),
            type_tag: type_tag.into(),
        });
        self
    }
}

/// The canonical list of events, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSchema {
    pub events: Vec<EventDefinition>,
}

impl EventSchema {
    /// Shape-check a parsed schema. `path` is only used in diagnostics.
    pub fn from_value(path: &Path, value: &Value) -> Result<Self> {
        let entries = value
            .get("events")
            .and_then(Value::as_array)
            .ok_or_else(|| ContentError::MissingEvents {
                path: path.to_path_buf(),
            })?;

        let events = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_event(path, index, entry))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn parse_event(path: &Path, index: usize, entry: &Value) -> Result<EventDefinition> {
    let invalid = |detail: String| ContentError::InvalidEvent {
        path: path.to_path_buf(),
        index,
        detail,
    };

    let entry = entry
        .as_object()
        .ok_or_else(|| invalid(format!("expected an object, found {}", type_name(entry))))?;

    let name = match entry.get("name") {
        Some(Value::String(name)) => name,
        Some(other) => return Err(invalid(format!("'name' must be a string, found {}", type_name(other)))),
        None => return Err(invalid("missing 'name'".to_string())),
    };
    if name.is_empty() {
        return Err(ContentError::EmptyEventName {
            path: path.to_path_buf(),
            index,
        });
    }

    let payload = match entry.get("payload") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Object(fields)) => fields
            .iter()
            .map(|(field, tag)| match tag {
                Value::String(tag) => Ok(PayloadField {
                    name: field.clone(),
                    type_tag: tag.clone(),
                }),
                other => Err(invalid(format!(
                    "payload field '{}' must name a type, found {}",
                    field,
                    type_name(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(invalid(format!(
                "'payload' must be an object, found {}",
                type_name(other)
            )))
        }
    };

    Ok(EventDefinition {
        name: name.clone(),
        payload,
    })
}

/// Read, BOM-strip, parse and shape-check an event schema file
pub fn load_schema(path: &Path) -> Result<EventSchema> {
    let value = read_json(path)?;
    let schema = EventSchema::from_value(path, &value)?;
    debug!(path = %path.display(), events = schema.len(), "event schema loaded");
    Ok(schema)
}
