//! Saltshaker - Generate cryptographically random application salts.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Print salts to stdout
//! │   ├── write         # Write salts to a file
//! │   ├── spec          # Show the resolved salt list
//! │   ├── resolve       # Override and format resolution
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── constants     # Alphabet and default salt table
//!     ├── spec          # Default/override merging
//!     ├── generator     # CSPRNG-backed salt generation
//!     ├── format        # env / yaml / php rendering and format guessing
//!     ├── writer        # Append/overwrite file output
//!     ├── salts         # Pipeline facade
//!     ├── config        # .saltshaker.toml loading
//!     └── validation    # Salt name checks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use saltshaker::core::format::OutputFormat;
//! use saltshaker::core::salts::generate_formatted;
//! use saltshaker::core::spec::OverrideSpec;
//!
//! let extra = OverrideSpec::Names(vec!["EXTRA_KEY".to_string()]);
//! let block = generate_formatted(OutputFormat::Env, Some(&extra))?;
//! print!("{}", block);
//! # Ok::<(), saltshaker::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
