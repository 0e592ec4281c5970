//! Event Code Generation
//!
//! Compiles the canonical event schema into a GDScript autoload so gameplay
//! code refers to `Events.PLAYER_DIED` instead of typing `"player_died"`.
//!
//! Pipeline:
//! - `schema`: load + shape-check `{"events": [...]}`
//! - `names`: derive collision-free constant names
//! - `render`: emit the script text
//!
//! The output file is replaced atomically: the artifact is written to a
//! temporary sibling and renamed over the target, so a failed run leaves the
//! previous file untouched.

pub mod names;
pub mod render;
pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use similar::TextDiff;
use tracing::{debug, info};

use crate::checksum::Checksum;
use crate::error::{ContentError, Result};

pub use names::{to_constant_name, ConstantTable, EventConstant};
pub use render::{render, RenderOptions};
pub use schema::{load_schema, EventDefinition, EventSchema, PayloadField};

/// What a successful `generate` produced
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub constants: usize,
    pub checksum: Checksum,
}

/// Result of comparing the on-disk artifact with a fresh render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Missing,
    /// Unified diff from the file on disk to the fresh render
    Stale { diff: String },
}

/// Load the schema and render it, without touching the output
pub fn compile(schema_path: &Path, options: &RenderOptions) -> Result<(EventSchema, String)> {
    let schema = load_schema(schema_path)?;
    let text = render(&schema, options)?;
    Ok((schema, text))
}

/// Load → render → write. Any existing output is replaced.
pub fn generate(schema_path: &Path, output_path: &Path, options: &RenderOptions) -> Result<GenerateSummary> {
    let (schema, text) = compile(schema_path, options)?;
    let checksum = Checksum::from_text(&text);

    write_atomic(output_path, &text, &checksum)?;
    info!(
        output = %output_path.display(),
        constants = schema.len(),
        checksum = checksum.short(),
        "event constants generated"
    );

    Ok(GenerateSummary {
        output: output_path.to_path_buf(),
        constants: schema.len(),
        checksum,
    })
}

/// Compare the artifact on disk with what `generate` would write
pub fn check(schema_path: &Path, output_path: &Path, options: &RenderOptions) -> Result<Freshness> {
    let (_, fresh) = compile(schema_path, options)?;

    let current = match fs::read_to_string(output_path) {
        Ok(current) => current,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Freshness::Missing),
        Err(e) => return Err(ContentError::from_read(output_path, e)),
    };

    if Checksum::from_text(&fresh).verify(&current) {
        return Ok(Freshness::UpToDate);
    }

    let diff = TextDiff::from_lines(&current, &fresh)
        .unified_diff()
        .context_radius(2)
        .header("on disk", "generated")
        .to_string();
    Ok(Freshness::Stale { diff })
}

/// Write `content` to `path` via a temporary sibling + rename, creating
/// parent directories first.
pub fn write_atomic(path: &Path, content: &str, checksum: &Checksum) -> Result<()> {
    let write_err = |source: std::io::Error| ContentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(write_err)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    let tmp = parent.join(format!(".{}.{}.tmp", file_name, checksum.short()));
    debug!(tmp = %tmp.display(), "writing artifact");

    let written = fs::write(&tmp, content).and_then(|_| fs::rename(&tmp, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}
