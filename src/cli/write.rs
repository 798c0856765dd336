//! Write command - generate salts and append them to a file.

use std::path::Path;
use zeroize::Zeroizing;

use crate::cli::{output, resolve, SaltArgs};
use crate::core::config::Config;
use crate::core::format::OutputFormat;
use crate::core::salts;
use crate::core::writer::{write_to_file, WriteMode};
use crate::error::Result;

/// Map the `--append` / `--overwrite` flags to a write mode.
///
/// Neither flag leaves the choice to the file's existence.
pub fn mode(append: bool, overwrite: bool) -> Option<WriteMode> {
    match (append, overwrite) {
        (true, _) => Some(WriteMode::Append),
        (_, true) => Some(WriteMode::Overwrite),
        _ => None,
    }
}

/// Generate salts and write them to `path`.
pub fn execute(
    config: Option<&Path>,
    path: &Path,
    format: Option<OutputFormat>,
    args: &SaltArgs,
    mode: Option<WriteMode>,
) -> Result<()> {
    let config = Config::load(config)?;
    let spec = resolve::resolve_spec(&config, &args.salts)?;
    let format = resolve::resolve_format(format, Some(path), &config);

    let rendered = Zeroizing::new(salts::generate_for_spec(&spec, format)?);
    let written = write_to_file(path, &rendered, mode)?;

    output::success(&format!(
        "wrote {} salts ({} bytes, {}) to {}",
        spec.len(),
        written,
        format,
        output::path(&path.display().to_string())
    ));
    Ok(())
}
