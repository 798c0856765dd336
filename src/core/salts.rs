//! Salt pipeline.
//!
//! Composes resolution, generation, formatting and writing into the
//! operations callers actually use.

use std::path::Path;
use tracing::info;

use crate::core::format::{format_salts, guess_format, OutputFormat};
use crate::core::generator::{SaltGenerator, SaltSet};
use crate::core::spec::{OverrideSpec, SaltSpec};
use crate::core::writer::{write_to_file, WriteMode};
use crate::error::Result;

/// Resolve `overrides` against the defaults and generate every salt.
pub fn generate_salts(overrides: Option<&OverrideSpec>) -> Result<SaltSet> {
    let spec = SaltSpec::resolve(overrides);
    SaltGenerator::new().generate(&spec)
}

/// Generate salts for `spec` and render them in `format`.
pub fn generate_for_spec(spec: &SaltSpec, format: OutputFormat) -> Result<String> {
    let salts = SaltGenerator::new().generate(spec)?;
    format_salts(&salts, format)
}

/// Generate salts and render them in `format`.
pub fn generate_formatted(
    format: OutputFormat,
    overrides: Option<&OverrideSpec>,
) -> Result<String> {
    generate_for_spec(&SaltSpec::resolve(overrides), format)
}

/// Pick the format for `path`: the explicit one, else a guess from the file
/// name, else PHP defines.
pub fn format_for_path(path: &Path, format: Option<OutputFormat>) -> OutputFormat {
    format
        .or_else(|| guess_format(&path.to_string_lossy()))
        .unwrap_or_default()
}

/// Generate salts and write them to `path`.
///
/// Returns the number of bytes written.
pub fn write_salts(
    path: impl AsRef<Path>,
    format: Option<OutputFormat>,
    overrides: Option<&OverrideSpec>,
    mode: Option<WriteMode>,
) -> Result<usize> {
    let path = path.as_ref();
    let format = format_for_path(path, format);
    let rendered = generate_formatted(format, overrides)?;
    let written = write_to_file(path, &rendered, mode)?;
    info!(path = %path.display(), %format, bytes = written, "salts written");
    Ok(written)
}
