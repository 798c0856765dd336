//! Test fixtures and constants.

/// The characters salts may contain.
pub const ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_ []{}<>~`+=,.;:/?|!@#$%^&*()";

/// Default salt names in output order.
pub const DEFAULT_NAMES: &[&str] = &[
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
    "WP_CACHE_KEY_SALT",
];

/// Minimal PHP config that salts get appended to.
pub const WP_CONFIG_HEAD: &str = "<?php\n$table_prefix = 'wp_';\n";

/// Project config with a table of lengths.
pub const CONFIG_WITH_LENGTHS: &str = r#"
format = "env"

[salts]
AUTH_KEY = 16
FROM_CONFIG = 24
"#;

/// Project config with a plain list of names.
pub const CONFIG_WITH_NAMES: &str = r#"salts = ["LISTED_KEY"]"#;
