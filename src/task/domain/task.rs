//! Task record type.

use super::{TaskId, TaskStatus};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task owned by exactly one user.
///
/// This is a plain record: the status machine lives on [`TaskStatus`] and
/// orchestration lives in the services, so the record itself only holds
/// fields. `id` and `owner` are set at construction and never reassigned;
/// all read and write access goes through store calls scoped to `owner`.
///
/// # Examples
///
/// ```
/// use taskboard::auth::domain::UserId;
/// use taskboard::task::domain::{Task, TaskStatus};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let task = Task::create("Write docs", "Document the store port", UserId::new(), &clock);
/// assert_eq!(task.status, TaskStatus::Open);
/// assert_eq!(task.created_at, task.updated_at);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, assigned at construction.
    pub id: TaskId,

    /// Short summary of the task. Non-empty; validated before construction.
    pub title: String,

    /// Longer description of the task. Non-empty; validated before
    /// construction.
    pub description: String,

    /// Current lifecycle status.
    pub status: TaskStatus,

    /// Identifier of the owning user. Immutable; the sole authority for
    /// reading, mutating, or deleting this task.
    pub owner: UserId,

    /// When the task was created.
    pub created_at: DateTime<Utc>,

    /// When the task was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by `owner` with status [`TaskStatus::Open`].
    ///
    /// `title` and `description` must already have passed draft validation;
    /// the record does not re-check them.
    #[must_use]
    pub fn create(
        title: impl Into<String>,
        description: impl Into<String>,
        owner: UserId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Open,
            owner,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
