//! Read-side service for owner-scoped task lookups.

use std::sync::Arc;

use crate::auth::domain::AuthenticatedUser;
use crate::task::domain::{Task, TaskFilter, TaskId};
use crate::task::ports::TaskStore;
use crate::task::services::error::{TaskServiceError, TaskServiceResult};

/// Answers task queries on behalf of an authenticated caller.
///
/// The service holds no state of its own; every call is delegated to the
/// store with the caller's identifier attached, so owner scoping is
/// enforced in a single store round trip.
#[derive(Debug, Clone)]
pub struct TaskQueryService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> TaskQueryService<S>
where
    S: TaskStore,
{
    /// Creates a query service backed by `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists the caller's tasks that match `filter`.
    ///
    /// An empty filter returns every task the caller owns. Zero matches
    /// yield an empty vector rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store fails.
    pub async fn get_tasks(
        &self,
        filter: &TaskFilter,
        user: &AuthenticatedUser,
    ) -> TaskServiceResult<Vec<Task>> {
        tracing::debug!(owner = %user.id, ?filter, "listing tasks");
        let tasks = self.store.list_for_owner(user.id, filter).await?;
        Ok(tasks)
    }

    /// Fetches a single task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with `id` is
    /// owned by the caller, and [`TaskServiceError::Store`] when the store
    /// fails.
    pub async fn get_task_by_id(
        &self,
        id: TaskId,
        user: &AuthenticatedUser,
    ) -> TaskServiceResult<Task> {
        tracing::debug!(task = %id, owner = %user.id, "fetching task");
        self.store
            .find_for_owner(id, user.id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}
