//! Error types for saltshaker.
//!
//! Every fallible operation in the crate returns [`Result`]. Sub-errors for
//! configuration and name validation are grouped so the binary can attach
//! targeted hints.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Formatter was handed something that is not a named set of salts.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The secure random source could not supply entropy.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[source] rand::Error),

    /// Writing rendered salts to a file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unrecognised output format selector.
    #[error("unknown output format: {0} (expected env, yaml, yml or php)")]
    UnknownFormat(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Salt name and length validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("salt name cannot be empty")]
    EmptyName,

    #[error("invalid salt name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("salt '{name}' is too long: {length} characters (maximum {max})")]
    TooLong { name: String, length: u64, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
