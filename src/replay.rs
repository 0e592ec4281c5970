//! Replay runner glue
//!
//! Runs the game engine headless against a recorded input file. The engine
//! is an external collaborator: it streams its own output and its exit
//! status becomes ours. Nothing here inspects what it prints.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::info;

use crate::config::ReplayConfig;
use crate::error::{ContentError, Result};

/// Something that can run with arguments and report an exit status
pub trait Engine {
    fn run(&self, args: &[OsString]) -> Result<i32>;
}

/// Spawns a real process with inherited stdio
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: String,
}

impl ProcessEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Engine for ProcessEngine {
    fn run(&self, args: &[OsString]) -> Result<i32> {
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ContentError::Engine(format!("failed to start {}: {}", self.program, e)))?;

        // Killed by a signal: no code, report a generic failure
        Ok(status.code().unwrap_or(1))
    }
}

/// Engine arguments for a headless replay
pub fn replay_args(content_root: &Path, recording: &Path) -> Vec<OsString> {
    vec![
        "--headless".into(),
        "--path".into(),
        content_root.as_os_str().to_owned(),
        "--".into(),
        "--replay".into(),
        recording.as_os_str().to_owned(),
    ]
}

/// Run one recording and return the engine's exit status
pub fn run_replay(engine: &dyn Engine, config: &ReplayConfig, recording: &Path) -> Result<i32> {
    let recording = absolute(recording);
    info!(recording = %recording.display(), "running replay");

    let code = engine.run(&replay_args(&config.content_root, &recording))?;
    info!(code, "engine exited");
    Ok(code)
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
