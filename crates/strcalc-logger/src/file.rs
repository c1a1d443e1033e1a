//! Append-only file logger
//!
//! Messages go either to a fixed file or to a per-day file named after the
//! local date (`2024_01_31.log`) inside a log directory. Each message is
//! written as one line terminated by the platform line separator.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use strcalc_core::Logger;
use tracing::debug;

/// Extension used for dated log files
pub const FILE_EXTENSION: &str = ".log";

/// `chrono` format of the date part of a dated log file name
pub const DATE_FORMAT: &str = "%Y_%m_%d";

/// Directory dated log files go to by default
pub const LOG_DIR: &str = "logs";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileLoggerConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

impl Default for FileLoggerConfig {
    fn default() -> Self {
        Self { log_dir: default_log_dir(), file_extension: default_file_extension() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Dated { log_dir: PathBuf, file_extension: String },
    File(PathBuf),
}

/// [`Logger`] writing to plain-text files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogger {
    destination: Destination,
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::from_config(&FileLoggerConfig::default())
    }
}

impl FileLogger {
    /// Logs to one file per day inside `log_dir`.
    pub fn dated(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            destination: Destination::Dated {
                log_dir: log_dir.into(),
                file_extension: FILE_EXTENSION.to_string(),
            },
        }
    }

    /// Logs every message to `path`.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self { destination: Destination::File(path.into()) }
    }

    pub fn from_config(config: &FileLoggerConfig) -> Self {
        Self {
            destination: Destination::Dated {
                log_dir: config.log_dir.clone(),
                file_extension: config.file_extension.clone(),
            },
        }
    }

    /// File a message logged on `date` would be written to.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        match &self.destination {
            Destination::Dated { log_dir, file_extension } => {
                log_dir.join(format!("{}{}", date.format(DATE_FORMAT), file_extension))
            }
            Destination::File(path) => path.clone(),
        }
    }

    /// File a message logged now would be written to.
    pub fn current_path(&self) -> PathBuf {
        self.path_for(Local::now().date_naive())
    }

    /// Appends `message` as one line to `path`, bypassing the configured
    /// destination. Missing parent directories are created.
    pub fn log_to(&self, message: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        file.write_all(format!("{message}{LINE_ENDING}").as_bytes())
            .with_context(|| format!("failed to write to log file {}", path.display()))?;

        debug!(path = %path.display(), "Logged message");
        Ok(())
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str) -> Result<()> {
        self.log_to(message, self.current_path())
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(LOG_DIR)
}

fn default_file_extension() -> String {
    FILE_EXTENSION.to_string()
}
