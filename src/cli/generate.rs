//! Generate command - print rendered salts to stdout.

use std::path::Path;
use zeroize::Zeroizing;

use crate::cli::{output, resolve, SaltArgs};
use crate::core::config::Config;
use crate::core::format::OutputFormat;
use crate::core::salts;
use crate::error::Result;

/// Print freshly generated salts in the requested format.
pub fn execute(config: Option<&Path>, format: Option<OutputFormat>, args: &SaltArgs) -> Result<()> {
    let config = Config::load(config)?;
    let spec = resolve::resolve_spec(&config, &args.salts)?;
    let format = resolve::resolve_format(format, None, &config);

    let rendered = Zeroizing::new(salts::generate_for_spec(&spec, format)?);
    output::raw(&rendered)?;
    Ok(())
}
