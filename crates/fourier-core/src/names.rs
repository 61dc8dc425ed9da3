//! Resource name validation.
//!
//! Database and collection names double as storage keys (a database name
//! becomes the stem of its blob file), so both are validated with the same
//! rules before any operation touches the store:
//! - Must be non-empty and at most 255 bytes
//! - Must not contain `/`, `\`, or control characters
//! - Must not contain `..` (parent traversal)
//! - Must not start with `.`

use crate::error::{ModelError, Result};

/// Characters that are forbidden anywhere in a resource name.
const FORBIDDEN_CHARS: &[char] = &['/', '\\'];

/// Longest accepted name, in bytes. Keeps the derived blob filename inside
/// common filesystem limits.
const MAX_NAME_BYTES: usize = 255;

/// Validate a database or collection name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use fourier_core::names::validate_name;
///
/// assert!(validate_name("shop").is_ok());
/// assert!(validate_name("orders-2024").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("../escape").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ModelError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty".into(),
        });
    }

    if name.len() > MAX_NAME_BYTES {
        return Err(ModelError::InvalidName {
            name: name.to_string(),
            reason: format!("name must not exceed {MAX_NAME_BYTES} bytes"),
        });
    }

    for ch in FORBIDDEN_CHARS {
        if name.contains(*ch) {
            return Err(ModelError::InvalidName {
                name: name.to_string(),
                reason: format!("contains forbidden character: {ch:?}"),
            });
        }
    }

    if name.chars().any(char::is_control) {
        return Err(ModelError::InvalidName {
            name: name.to_string(),
            reason: "must not contain control characters".into(),
        });
    }

    // Must not contain `..` (parent traversal).
    if name.contains("..") {
        return Err(ModelError::InvalidName {
            name: name.to_string(),
            reason: "must not contain '..'".into(),
        });
    }

    // Must not start with `.` (reserved for housekeeping files).
    if name.starts_with('.') {
        return Err(ModelError::InvalidName {
            name: name.to_string(),
            reason: "must not start with '.'".into(),
        });
    }

    Ok(())
}
