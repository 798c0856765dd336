//! Configuration file management.
//!
//! Handles locating and reading optional `.saltshaker.toml` files:
//!
//! ```toml
//! format = "env"
//!
//! [salts]
//! AUTH_KEY = 16
//! EXTRA_KEY = 32
//! ```
//!
//! `salts` may also be a plain list of names, each generated with the
//! default length.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::format::OutputFormat;
use crate::core::spec::{parse_length, OverrideSpec};
use crate::core::types::RawLength;
use crate::core::validation::validate_length;
use crate::error::{ConfigError, Result};

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    format: Option<String>,
    salts: Option<toml::Value>,
}

/// Loaded configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default output format when neither the command line nor the file
    /// name decides it.
    pub format: Option<OutputFormat>,
    /// Salt overrides applied before command-line overrides.
    pub salts: Option<OverrideSpec>,
    /// File the configuration was read from.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Path to the project configuration file in the current directory
    pub fn project_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Path to the per-user configuration file, if the platform has one
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::CONFIG_DIR)
                .join(constants::GLOBAL_CONFIG_FILE)
        })
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the project file is tried,
    /// then the per-user file; if neither exists an empty configuration is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit path, or a
    /// read/parse/validation error for a file that exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            return Self::load_from(path);
        }

        let candidates = std::iter::once(Self::project_path()).chain(Self::global_path());
        for path in candidates {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&contents)?;
        config.source = Some(path.to_path_buf());

        debug!(
            format = ?config.format,
            overrides = config.salts.is_some(),
            "config loaded"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidValue` for values of the wrong shape.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;

        let format = raw
            .format
            .map(|f| {
                f.parse::<OutputFormat>()
                    .map_err(|_| ConfigError::InvalidValue {
                        field: "format",
                        reason: format!("unknown format '{}', expected env, yaml, yml or php", f),
                    })
            })
            .transpose()?;

        let salts = raw.salts.map(overrides_from_value).transpose()?;

        Ok(Self {
            format,
            salts,
            source: None,
        })
    }
}

/// Interpret the `salts` value as a list of names or a name → length table.
fn overrides_from_value(value: toml::Value) -> Result<OverrideSpec> {
    match value {
        toml::Value::Array(items) => {
            let names = items
                .into_iter()
                .map(|item| match item {
                    toml::Value::String(name) => Ok(name),
                    other => Err(ConfigError::InvalidValue {
                        field: "salts",
                        reason: format!("expected a salt name, found {}", other.type_str()),
                    }),
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(OverrideSpec::Names(names))
        }
        toml::Value::Table(table) => {
            let lengths = table
                .into_iter()
                .map(|(name, length)| {
                    let length = length_from_value(&length);
                    validate_length(&name, length).map_err(|e| ConfigError::InvalidValue {
                        field: "salts",
                        reason: e.to_string(),
                    })?;
                    Ok((name, length))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(OverrideSpec::Lengths(lengths))
        }
        other => Err(ConfigError::InvalidValue {
            field: "salts",
            reason: format!(
                "expected a list of names or a table of lengths, found {}",
                other.type_str()
            ),
        }
        .into()),
    }
}

/// Lengths that are not positive integers map to zero, i.e. the default.
fn length_from_value(value: &toml::Value) -> RawLength {
    match value {
        toml::Value::Integer(n) => RawLength::try_from(*n).unwrap_or(0),
        toml::Value::String(s) => parse_length(s),
        _ => 0,
    }
}
