//! Error types for task domain rules.

use super::{ParseTaskStatusError, TaskId, TaskStatus};
use thiserror::Error;

/// Errors raised by the task status machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested status value is not in the closed enumeration.
    #[error(transparent)]
    InvalidStatusValue(#[from] ParseTaskStatusError),

    /// The requested status change is not in the allowed transition table.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Task the transition was requested against.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the transition asked for.
        to: TaskStatus,
    },
}
