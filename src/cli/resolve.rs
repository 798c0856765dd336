//! Spec and format resolution helpers for CLI commands.

use std::path::Path;
use tracing::debug;

use crate::core::config::Config;
use crate::core::format::{guess_format, OutputFormat};
use crate::core::spec::{parse_length, OverrideSpec, SaltSpec};
use crate::core::validation::{validate_length, validate_name};
use crate::error::Result;

/// Turn `-s NAME[=LEN]` arguments into an override.
///
/// Rules:
/// - No arguments: no override
/// - Only bare names: a list of names
/// - Any `NAME=LEN`: a name → length mapping, bare names mapped to the default
///
/// Names are matched against the defaults without regard to case, so
/// `-s auth_key=16` shortens `AUTH_KEY`.
pub fn parse_overrides(args: &[String]) -> Result<Option<OverrideSpec>> {
    if args.is_empty() {
        return Ok(None);
    }

    let mut pairs = Vec::with_capacity(args.len());
    let mut any_length = false;
    for arg in args {
        let (name, length) = match arg.split_once('=') {
            Some((name, length)) => {
                any_length = true;
                (name.trim(), parse_length(length))
            }
            None => (arg.trim(), 0),
        };
        validate_name(name)?;
        validate_length(name, length)?;
        pairs.push((name.to_string(), length));
    }

    let overrides = if any_length {
        OverrideSpec::Lengths(pairs)
    } else {
        OverrideSpec::Names(pairs.into_iter().map(|(name, _)| name).collect())
    };
    Ok(Some(overrides))
}

/// Build the final spec: defaults, then config overrides, then command line.
pub fn resolve_spec(config: &Config, args: &[String]) -> Result<SaltSpec> {
    let cli = parse_overrides(args)?;
    let mut spec = SaltSpec::resolve(config.salts.as_ref());
    if let Some(cli) = &cli {
        spec.apply(cli);
    }
    debug!(salts = spec.len(), "spec resolved from config and arguments");
    Ok(spec)
}

/// Pick the output format.
///
/// Rules:
/// - `--format` wins
/// - Otherwise guess from the destination file name
/// - Otherwise the config file's `format`
/// - Otherwise PHP defines
pub fn resolve_format(
    explicit: Option<OutputFormat>,
    path: Option<&Path>,
    config: &Config,
) -> OutputFormat {
    explicit
        .or_else(|| path.and_then(|p| guess_format(&p.to_string_lossy())))
        .or(config.format)
        .unwrap_or_default()
}
