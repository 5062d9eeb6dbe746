//! Append-only activity log kept next to the snapshot files.
//!
//! Each event becomes one `[YYYY-MM-DD HH:MM:SS] <message>` line in the log
//! file. The bare message is echoed to stdout through `tracing`, which adds
//! its own timestamp.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{error, info, warn};

use crate::error::{Result, ScrapeError};

pub const LOG_FILE_NAME: &str = "scraper_log.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    /// Log file inside `output_dir`. The directory is created on first write.
    pub fn in_dir(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(LOG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.record(Level::Info, message.as_ref())
    }

    pub fn warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.record(Level::Warn, message.as_ref())
    }

    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.record(Level::Error, message.as_ref())
    }

    pub fn record(&self, level: Level, message: &str) -> Result<()> {
        match level {
            Level::Info => info!("{}", message),
            Level::Warn => warn!("{}", message),
            Level::Error => error!("{}", message),
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScrapeError::io(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ScrapeError::io(&self.path, e))?;

        writeln!(file, "{}", format_line(Local::now(), message))
            .map_err(|e| ScrapeError::io(&self.path, e))
    }
}

pub fn format_line(at: DateTime<Local>, message: &str) -> String {
    format!("[{}] {}", at.format("%Y-%m-%d %H:%M:%S"), message)
}
