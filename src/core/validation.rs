//! Input validation for saltshaker.
//!
//! Validates salt names supplied on the command line and salt lengths from
//! any source.

use crate::core::constants::MAX_LENGTH;
use crate::core::types::RawLength;
use crate::error::{Result, ValidationError};

/// Validate a salt name.
///
/// Salt names end up as constant names, environment variables or YAML keys:
/// - Only ASCII letters, digits, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "cannot start with a digit".to_string(),
        }
        .into());
    }

    if let Some((i, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: format!(
                "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
                ch,
                i + 1
            ),
        }
        .into());
    }

    Ok(())
}

/// Validate a requested salt length.
///
/// Zero is accepted and means "use the default".
///
/// # Errors
///
/// Returns `ValidationError::TooLong` above [`MAX_LENGTH`].
pub fn validate_length(name: &str, length: RawLength) -> Result<()> {
    match usize::try_from(length) {
        Ok(length) if length <= MAX_LENGTH => Ok(()),
        _ => Err(ValidationError::TooLong {
            name: name.to_string(),
            length,
            max: MAX_LENGTH,
        }
        .into()),
    }
}
