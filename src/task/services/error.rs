//! Caller-facing error type shared by the task services.

use thiserror::Error;

use crate::task::domain::{TaskDomainError, TaskId};
use crate::task::ports::TaskStoreError;
use crate::task::validation::TaskValidationError;

/// Result alias for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Errors surfaced by the task query and command services.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task with the requested identifier is owned by the caller.
    ///
    /// An unknown identifier and an identifier owned by another user both
    /// produce this error, so callers cannot probe for the existence of
    /// tasks they do not own.
    #[error("task with ID \"{0}\" not found")]
    NotFound(TaskId),
    /// A writable field violated a validation rule.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// The domain rejected a status value or transition.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}
