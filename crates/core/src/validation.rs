//! Presence and shape checks shared by every create/update request.
//!
//! Request bodies arrive with every field optional so that a missing
//! field is reported as a validation error with a readable message rather
//! than a deserialization failure.

use crate::error::CoreError;

/// Maximum length for entity names (clients, products).
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for free-text fields (description, address, ...).
pub const MAX_TEXT_LENGTH: usize = 2_000;

/// Unwrap a required field or fail with `"<field> is required"`.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Validate a display name: non-blank and at most [`MAX_NAME_LENGTH`] characters.
///
/// Returns the trimmed name.
pub fn validate_name(value: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalize an optional free-text field.
///
/// Blank strings collapse to `None`; anything longer than
/// [`MAX_TEXT_LENGTH`] is rejected.
pub fn normalize_text(value: Option<String>, field: &str) -> Result<Option<String>, CoreError> {
    match value {
        None => Ok(None),
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else if trimmed.chars().count() > MAX_TEXT_LENGTH {
                Err(CoreError::Validation(format!(
                    "{field} must be at most {MAX_TEXT_LENGTH} characters"
                )))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}
