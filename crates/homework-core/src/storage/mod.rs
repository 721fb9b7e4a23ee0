mod config;
pub mod assignment_store;

pub use assignment_store::{AssignmentStore, JsonFileStore, MemoryStore};
pub use config::{Config, LoggingConfig, StorageConfig, TipsConfig, UiConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the application data directory, creating it if needed.
///
/// `HOMEWORK_TRACKER_HOME` overrides the location outright. Otherwise this is
/// `~/.config/homework-tracker[-dev]/`, with `HOMEWORK_TRACKER_ENV=dev`
/// selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("HOMEWORK_TRACKER_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HOMEWORK_TRACKER_ENV")
                .unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("homework-tracker-dev")
            } else {
                base_dir.join("homework-tracker")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
