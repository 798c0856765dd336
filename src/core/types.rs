//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A salt name (e.g., AUTH_KEY, NONCE_SALT).
pub type SaltName = String;

/// Number of characters a salt is generated with.
pub type SaltLength = usize;

/// A requested length as supplied by a caller.
///
/// Zero means "use the default length".
pub type RawLength = u64;
