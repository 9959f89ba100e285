//! Configuration management for adr-watch.

mod catalog;
mod settings;

pub use catalog::{Catalog, OFFICIAL_DOLLAR};
pub use settings::{Config, DisplayConfig, FetchConfig, PollConfig, ProviderConfig};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "adr-watch", "adr-watch")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::config("Could not determine config directory"))
}

/// Get the log directory path.
pub fn log_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "adr-watch", "adr-watch")
        .map(|dirs| dirs.data_dir().join("logs"))
        .ok_or_else(|| Error::config("Could not determine log directory"))
}
