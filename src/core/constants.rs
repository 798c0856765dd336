//! Constants used throughout saltshaker.
//!
//! Centralizes the salt alphabet, the default salt table and file names.

/// Characters salts are drawn from.
///
/// 92 printable ASCII characters. Neither `'`, `"` nor `\` appear here,
/// which is what lets the formatter substitute values into quoted templates
/// without escaping.
pub const ALPHABET: &[u8; 92] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_ []{}<>~`+=,.;:/?|!@#$%^&*()";

/// Length used when a salt has no usable length of its own.
pub const DEFAULT_LENGTH: usize = 64;

/// Longest salt that will be generated.
pub const MAX_LENGTH: usize = 4096;

/// Salts generated on every run, in output order.
pub const DEFAULT_SALTS: &[(&str, usize)] = &[
    ("AUTH_KEY", 64),
    ("SECURE_AUTH_KEY", 64),
    ("LOGGED_IN_KEY", 64),
    ("NONCE_KEY", 64),
    ("AUTH_SALT", 64),
    ("SECURE_AUTH_SALT", 64),
    ("LOGGED_IN_SALT", 64),
    ("NONCE_SALT", 64),
    ("WP_CACHE_KEY_SALT", 32),
];

/// Project-local configuration file name (.saltshaker.toml).
pub const CONFIG_FILE: &str = ".saltshaker.toml";

/// Directory under the user config dir holding the global config.
pub const CONFIG_DIR: &str = "saltshaker";

/// Global configuration file name inside [`CONFIG_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SALTSHAKER_LOG";

/// Line terminator of the host platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator of the host platform.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
