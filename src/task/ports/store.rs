//! Store port for owner-scoped task persistence.

use crate::auth::domain::UserId;
use crate::task::domain::{Task, TaskFilter, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// The store is the sole point of contact with physical storage. Scoped
/// operations take the owner's [`UserId`] and enforce ownership inside the
/// single call, so callers never fetch first and check ownership after.
/// Implementations must make each call atomic (at least read-committed).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task identifier
    /// already exists.
    async fn create(&self, task: Task) -> TaskStoreResult<Task>;

    /// Finds a task by identifier, scoped to `owner`.
    ///
    /// Returns `None` when no task with that identifier is owned by
    /// `owner`; a missing task and another user's task are deliberately
    /// indistinguishable.
    async fn find_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<Option<Task>>;

    /// Lists tasks owned by `owner` matching `filter`, in insertion order.
    ///
    /// An empty filter returns every owned task; no match returns an empty
    /// vector.
    async fn list_for_owner(
        &self,
        owner: UserId,
        filter: &TaskFilter,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Persists mutated fields of an existing task and returns the stored
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<Task>;

    /// Deletes a task by identifier, scoped to `owner`.
    ///
    /// Returns whether a record was removed; deleting a missing or
    /// foreign-owned task returns `false`, not an error.
    async fn delete_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<bool>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task targeted by an update does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure the core does not interpret further.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
