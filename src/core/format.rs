//! Output formats.
//!
//! Renders a [`SaltSet`] as `.env` assignments, YAML mappings or PHP
//! `define()` calls. Each format is described by one [`Layout`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::core::constants::LINE_ENDING;
use crate::core::generator::SaltSet;
use crate::error::{Error, Result};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `NAME='value'`
    Env,
    /// `name: "value"`
    Yaml,
    /// `define('NAME', 'value');`
    #[default]
    #[serde(rename = "php")]
    SourceDefine,
}

/// How a salt name is cased before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    Upper,
    Lower,
}

impl NameCase {
    fn apply(self, name: &str) -> String {
        match self {
            Self::Upper => name.to_uppercase(),
            Self::Lower => name.to_lowercase(),
        }
    }
}

/// Line shape of one output format.
///
/// A line is `prefix NAME separator VALUE suffix`. Values are inserted
/// verbatim, so `quote` must never occur in the alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub prefix: &'static str,
    pub separator: &'static str,
    pub suffix: &'static str,
    pub line_end: &'static str,
    pub case: NameCase,
    pub quote: u8,
}

const ENV_LAYOUT: Layout = Layout {
    prefix: "",
    separator: "='",
    suffix: "'",
    line_end: "\n",
    case: NameCase::Upper,
    quote: b'\'',
};

const YAML_LAYOUT: Layout = Layout {
    prefix: "",
    separator: ": \"",
    suffix: "\"",
    line_end: LINE_ENDING,
    case: NameCase::Lower,
    quote: b'"',
};

const SOURCE_DEFINE_LAYOUT: Layout = Layout {
    prefix: "define('",
    separator: "', '",
    suffix: "');",
    line_end: LINE_ENDING,
    case: NameCase::Upper,
    quote: b'\'',
};

impl OutputFormat {
    /// All formats.
    pub const ALL: [OutputFormat; 3] = [Self::Env, Self::Yaml, Self::SourceDefine];

    /// Layout used to render this format.
    pub const fn layout(self) -> &'static Layout {
        match self {
            Self::Env => &ENV_LAYOUT,
            Self::Yaml => &YAML_LAYOUT,
            Self::SourceDefine => &SOURCE_DEFINE_LAYOUT,
        }
    }

    /// Canonical selector name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Yaml => "yaml",
            Self::SourceDefine => "php",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "env" => Ok(Self::Env),
            "yaml" | "yml" => Ok(Self::Yaml),
            "php" => Ok(Self::SourceDefine),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Render `salts` in `format`.
///
/// Lines are joined by the format's line terminator and the whole block is
/// wrapped in one leading and one trailing terminator.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if `salts` is empty.
pub fn format_salts(salts: &SaltSet, format: OutputFormat) -> Result<String> {
    if salts.is_empty() {
        return Err(Error::InvalidInput(
            "no salts to format; expected named salts, e.g. MY_SALT => value".to_string(),
        ));
    }

    let layout = format.layout();
    let lines: Vec<String> = salts
        .iter()
        .map(|(name, value)| {
            format!(
                "{}{}{}{}{}",
                layout.prefix,
                layout.case.apply(name),
                layout.separator,
                value,
                layout.suffix
            )
        })
        .collect();

    debug!(format = %format, lines = lines.len(), "formatted salts");
    Ok(format!(
        "{end}{}{end}",
        lines.join(layout.line_end),
        end = layout.line_end
    ))
}

/// Guess the output format from a file name.
///
/// Looks at the extension first (`env`, `yml`, `yaml`, `php`, matched by
/// suffix and case-insensitively), then searches the whole name for `.env`,
/// `.yml` or `.php`. A name without an extension yields `None`.
pub fn guess_format(file_name: &str) -> Option<OutputFormat> {
    let base = file_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_name);
    let extension = base.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())?;
    if extension.is_empty() {
        return None;
    }

    if extension.ends_with("env") {
        Some(OutputFormat::Env)
    } else if extension.ends_with("yml") || extension.ends_with("yaml") {
        Some(OutputFormat::Yaml)
    } else if extension.ends_with("php") {
        Some(OutputFormat::SourceDefine)
    } else if file_name.contains(".env") {
        Some(OutputFormat::Env)
    } else if file_name.contains(".yml") {
        Some(OutputFormat::Yaml)
    } else if file_name.contains(".php") {
        Some(OutputFormat::SourceDefine)
    } else {
        None
    }
}
