//! Spec command - show which salts would be generated.

use serde::Serialize;
use std::path::Path;

use crate::cli::{output, resolve, SaltArgs};
use crate::core::config::Config;
use crate::core::format::OutputFormat;
use crate::core::spec::SaltSpec;
use crate::error::Result;

#[derive(Serialize)]
struct SpecReport<'a> {
    format: OutputFormat,
    config: Option<String>,
    salts: &'a SaltSpec,
}

/// List the resolved salt names and lengths.
pub fn execute(config: Option<&Path>, args: &SaltArgs, json: bool) -> Result<()> {
    let config = Config::load(config)?;
    let spec = resolve::resolve_spec(&config, &args.salts)?;
    let format = resolve::resolve_format(None, None, &config);

    if json {
        let report = SpecReport {
            format,
            config: config.source.as_ref().map(|p| p.display().to_string()),
            salts: &spec,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section("Salts");
    for entry in spec.entries() {
        output::kv(&entry.name, entry.length);
    }
    output::rule();
    match &config.source {
        Some(path) => output::dimmed(&format!(
            "{} salts, format {} (config: {})",
            spec.len(),
            format,
            path.display()
        )),
        None => output::dimmed(&format!("{} salts, format {}", spec.len(), format)),
    }
    Ok(())
}
