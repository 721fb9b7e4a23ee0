//! Core error types for homework-core.
//!
//! The advisory functions in [`crate::advisor`] never fail; everything here
//! belongs to the manager, store, and configuration layers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for homework-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Assignment store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No assignment carries the requested id
    #[error("Assignment with ID '{id}' not found")]
    NotFound { id: u64 },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Assignment store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the assignments file
    #[error("Failed to read assignments from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the assignments file
    #[error("Failed to save assignments to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode assignments
    #[error("Failed to encode assignments: {0}")]
    EncodeFailed(String),

    /// The in-memory store was configured to reject writes
    #[error("Store rejected the write")]
    Rejected,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Assignment validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field missing from a new assignment
    #[error("Name, class, due date, priority, and difficulty are required (missing '{0}')")]
    MissingField(&'static str),

    /// Difficulty outside 1..=10
    #[error("Difficulty must be an integer between 1 and 10, got {0}")]
    DifficultyOutOfRange(i64),

    /// Due date text that matches none of the accepted formats
    #[error("Invalid date format for due_date: {value}")]
    InvalidDate { value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
