//! File-backed logging.
//!
//! The terminal belongs to the game while it runs, so records go to an
//! append-only file instead of stderr.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Install the global logger writing to `path` with `filter` directives.
pub fn init(path: &Path, filter: &str) -> Result<()> {
    let file = open_log_file(path)?;
    Builder::new()
        .parse_filters(filter)
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {} {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("logger already installed")
}
