//! Write-side service for owner-scoped task mutations.

use std::sync::Arc;

use mockable::Clock;

use crate::auth::domain::AuthenticatedUser;
use crate::task::domain::{Task, TaskDomainError, TaskId, TaskStatus};
use crate::task::ports::TaskStore;
use crate::task::services::error::{TaskServiceError, TaskServiceResult};
use crate::task::validation;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request carrying the new task's writable fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Request payload for moving a task to a new status.
///
/// The status travels as the raw caller-supplied string; the service parses
/// it only after confirming the caller owns the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    task_id: TaskId,
    status: String,
}

impl UpdateTaskStatusRequest {
    /// Creates a request targeting `task_id` with the raw status value.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }

    /// Returns the targeted task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the raw requested status value.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Request payload for editing a task's writable fields.
///
/// Fields left unset keep their current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
}

impl EditTaskRequest {
    /// Creates an edit request for `task_id` with no field changes.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
        }
    }

    /// Replaces the task's title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the task's description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the targeted task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the replacement title, when one was supplied.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description, when one was supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Executes task mutations on behalf of an authenticated caller.
///
/// Mutations that target an existing task fetch it owner-scoped first, so a
/// task owned by another user is indistinguishable from one that does not
/// exist. Timestamps come from the injected clock.
#[derive(Debug, Clone)]
pub struct TaskCommandService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskCommandService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a command service backed by `store` and `clock`.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a task owned by the caller.
    ///
    /// The new task starts open with both timestamps set to the current
    /// instant, and is returned as persisted by the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title or
    /// description is empty, and [`TaskServiceError::Store`] when the store
    /// fails.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
        user: &AuthenticatedUser,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest { title, description } = request;
        validation::validate_draft(&title, &description)?;

        let task = Task::create(title, description, user.id, &*self.clock);
        let stored = self.store.create(task).await?;
        tracing::info!(task = %stored.id, owner = %user.id, "task created");
        Ok(stored)
    }

    /// Moves one of the caller's tasks to a new status.
    ///
    /// The task is fetched owner-scoped before the requested value is
    /// parsed, so probing with a bogus status against a foreign task still
    /// reports not-found.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the caller owns no task
    /// with that identifier, [`TaskServiceError::Domain`] when the status
    /// value is unknown or the transition is not allowed, and
    /// [`TaskServiceError::Store`] when the store fails.
    pub async fn update_status(
        &self,
        request: UpdateTaskStatusRequest,
        user: &AuthenticatedUser,
    ) -> TaskServiceResult<Task> {
        let UpdateTaskStatusRequest { task_id, status } = request;
        let mut task = self
            .store
            .find_for_owner(task_id, user.id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;

        let next = TaskStatus::try_from(status.as_str()).map_err(TaskDomainError::from)?;
        if !task.status.can_transition_to(next) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: task.id,
                from: task.status,
                to: next,
            }
            .into());
        }

        task.status = next;
        task.updated_at = self.clock.utc();
        let updated = self.store.update(&task).await?;
        tracing::info!(
            task = %updated.id,
            status = %updated.status,
            "task status updated"
        );
        Ok(updated)
    }

    /// Rewrites the supplied writable fields of one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the caller owns no task
    /// with that identifier, [`TaskServiceError::Validation`] when a
    /// supplied field is empty, and [`TaskServiceError::Store`] when the
    /// store fails.
    pub async fn edit_task(
        &self,
        request: EditTaskRequest,
        user: &AuthenticatedUser,
    ) -> TaskServiceResult<Task> {
        let EditTaskRequest {
            task_id,
            title,
            description,
        } = request;
        let mut task = self
            .store
            .find_for_owner(task_id, user.id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;

        validation::validate_edit(title.as_deref(), description.as_deref())?;

        if let Some(new_title) = title {
            task.title = new_title;
        }
        if let Some(new_description) = description {
            task.description = new_description;
        }
        task.updated_at = self.clock.utc();

        let updated = self.store.update(&task).await?;
        tracing::info!(task = %updated.id, "task fields edited");
        Ok(updated)
    }

    /// Deletes one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the caller owns no task
    /// with that identifier, and [`TaskServiceError::Store`] when the store
    /// fails.
    pub async fn delete_task(
        &self,
        id: TaskId,
        user: &AuthenticatedUser,
    ) -> TaskServiceResult<()> {
        let removed = self.store.delete_for_owner(id, user.id).await?;
        if !removed {
            return Err(TaskServiceError::NotFound(id));
        }
        tracing::info!(task = %id, owner = %user.id, "task deleted");
        Ok(())
    }
}
