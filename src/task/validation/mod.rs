//! Task draft validation.
//!
//! The transport layer checks request shape (fields present and typed)
//! before the core is invoked, but non-empty title and description are
//! domain invariants, so the command service re-validates them here rather
//! than trusting the caller. Rules are pure functions; [`validate_draft`]
//! runs them all and reports every violation at once instead of failing on
//! the first.

pub mod rules;

use thiserror::Error;

/// Violations found while validating task fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty or whitespace-only.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The description is empty or whitespace-only.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// Multiple violations occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

impl TaskValidationError {
    /// Wraps violations, unwrapping the list when only one occurred.
    #[must_use]
    pub fn multiple(mut errors: Vec<Self>) -> Self {
        if errors.len() == 1 {
            return errors.remove(0);
        }
        Self::Multiple(errors)
    }
}

fn format_errors(errors: &[TaskValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates the writable fields of a task draft.
///
/// # Errors
///
/// Returns a [`TaskValidationError`] carrying every violation found; a
/// single violation is returned unwrapped.
///
/// # Examples
///
/// ```
/// use taskboard::task::validation::{TaskValidationError, validate_draft};
///
/// assert!(validate_draft("Fix Bug", "Parser breaks on escapes").is_ok());
/// assert_eq!(
///     validate_draft("", "Parser breaks on escapes"),
///     Err(TaskValidationError::EmptyTitle),
/// );
/// ```
pub fn validate_draft(title: &str, description: &str) -> Result<(), TaskValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = rules::validate_title(title) {
        errors.push(e);
    }

    if let Err(e) = rules::validate_description(description) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TaskValidationError::multiple(errors))
    }
}

/// Validates the fields supplied in a partial task edit.
///
/// Absent fields are skipped; present fields must satisfy the same rules
/// as a full draft.
///
/// # Errors
///
/// Returns a [`TaskValidationError`] carrying every violation found among
/// the supplied fields; a single violation is returned unwrapped.
pub fn validate_edit(
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(), TaskValidationError> {
    let mut errors = Vec::new();

    if let Some(value) = title
        && let Err(e) = rules::validate_title(value)
    {
        errors.push(e);
    }

    if let Some(value) = description
        && let Err(e) = rules::validate_description(value)
    {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TaskValidationError::multiple(errors))
    }
}
