//! Shared JSON document loading

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{ContentError, Result};

const BOM: char = '\u{feff}';

/// Read a file and parse it as JSON.
///
/// A leading byte-order mark is dropped before parsing; editors on Windows
/// like to add one.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| ContentError::from_read(path, e))?;
    parse_json(path, &content)
}

pub(crate) fn parse_json(path: &Path, content: &str) -> Result<Value> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    serde_json::from_str(content).map_err(|source| ContentError::Syntax {
        path: path.to_path_buf(),
        source,
    })
}

/// Human name of a JSON value's type, for structure diagnostics
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
