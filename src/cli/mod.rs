//! Command-line interface.

pub mod completions;
pub mod generate;
pub mod output;
pub mod resolve;
pub mod spec;
pub mod write;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::format::OutputFormat;

/// Saltshaker - Generate application salts.
#[derive(Parser)]
#[command(
    name = "saltshaker",
    about = "Generate cryptographically random application salts",
    version,
    after_help = "Formats: env (NAME='value'), yaml (name: \"value\"), php (define('NAME', 'value');)"
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: .saltshaker.toml, then the user config dir)
    #[arg(long, global = true, env = "SALTSHAKER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that generates salts.
#[derive(Args, Debug, Clone, Default)]
pub struct SaltArgs {
    /// Extra or replacement salt, e.g. `-s EXTRA_KEY` or `-s AUTH_KEY=16`
    #[arg(short = 's', long = "salt", value_name = "NAME[=LEN]")]
    pub salts: Vec<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print freshly generated salts to stdout
    Generate {
        /// Output format: env, yaml, yml or php
        #[arg(short, long)]
        format: Option<OutputFormat>,
        #[command(flatten)]
        salts: SaltArgs,
    },

    /// Generate salts and write them to a file
    Write {
        /// Destination file; its name picks the format unless --format is given
        path: PathBuf,
        /// Output format: env, yaml, yml or php
        #[arg(short, long)]
        format: Option<OutputFormat>,
        #[command(flatten)]
        salts: SaltArgs,
        /// Append to the file (default when it already exists)
        #[arg(long, conflicts_with = "overwrite")]
        append: bool,
        /// Replace the file contents
        #[arg(long)]
        overwrite: bool,
    },

    /// Show which salts would be generated and their lengths
    Spec {
        #[command(flatten)]
        salts: SaltArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let config = config.as_deref();
    match command {
        Generate { format, salts } => generate::execute(config, format, &salts),
        Write {
            path,
            format,
            salts,
            append,
            overwrite,
        } => write::execute(config, &path, format, &salts, write::mode(append, overwrite)),
        Spec { salts, json } => spec::execute(config, &salts, json),
        Completions { shell } => completions::execute(shell),
    }
}
