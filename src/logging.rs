//! File logging
//!
//! The terminal belongs to the UI, so log lines go to `burrow.log` in the
//! config directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;

use crate::config::log_file;

/// Install the global subscriber. Returns the log file path, or None if
/// logging could not be set up (the app still runs, just silently).
pub fn init(level: Level) -> Option<PathBuf> {
    let path = log_file()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .ok()?;
    Some(path)
}
