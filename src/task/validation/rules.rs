//! Individual task field validation rules.
//!
//! Each rule is a pure function validating one field, returning `Ok(())`
//! on success or the specific violation on failure.

use super::TaskValidationError;

/// Validates that the title is not empty after trimming.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyTitle`] if the title contains no
/// non-whitespace characters.
pub fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

/// Validates that the description is not empty after trimming.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyDescription`] if the description
/// contains no non-whitespace characters.
pub fn validate_description(description: &str) -> Result<(), TaskValidationError> {
    if description.trim().is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    Ok(())
}
