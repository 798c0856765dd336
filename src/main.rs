//! Saltshaker - Generate cryptographically random application salts.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use saltshaker::cli::output;
use saltshaker::cli::{execute, Cli};
use saltshaker::core::constants::LOG_ENV;
use saltshaker::error::{ConfigError, Error, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("saltshaker=debug")
        } else {
            EnvFilter::new("saltshaker=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound(_)) => {
                Some("check --config or SALTSHAKER_CONFIG")
            }
            Error::Config(ConfigError::Parse(_) | ConfigError::InvalidValue { .. }) => {
                Some("salts must be a list of names or a table of NAME = length")
            }
            Error::Validation(ValidationError::TooLong { .. }) => {
                Some("pick a shorter length, or 0 for the default")
            }
            Error::Validation(_) => Some("salt names use letters, digits and underscore"),
            Error::UnknownFormat(_) => Some("pass --format env, yaml or php"),
            Error::Entropy(_) => Some("the operating system random source is unavailable"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
