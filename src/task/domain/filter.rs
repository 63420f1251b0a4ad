//! Listing filter for owner-scoped task queries.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Requester-supplied predicate narrowing a task listing.
///
/// Both predicates are optional and conjunctive: a task must satisfy every
/// predicate that is present. An empty filter matches every task. The
/// search predicate is a case-insensitive substring match against the
/// title or the description; a task matches when either field contains
/// the search string.
///
/// [`TaskFilter::matches`] is the single definition of these semantics;
/// the in-memory store evaluates it directly and the SQL store mirrors it
/// in its `WHERE` clause.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::{TaskFilter, TaskStatus};
///
/// let filter = TaskFilter::new()
///     .with_status(TaskStatus::Open)
///     .with_search("parser");
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Exact-match status predicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    /// Case-insensitive substring predicate over title and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl TaskFilter {
    /// Creates an empty filter matching every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            search: None,
        }
    }

    /// Sets the status equality predicate.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the free-text search predicate.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Reports whether no predicate is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.search.is_none()
    }

    /// Evaluates the filter against a task.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = self.status.is_none_or(|status| task.status == status);
        let search_ok = self.search.as_deref().is_none_or(|search| {
            let needle = search.to_lowercase();
            task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        });
        status_ok && search_ok
    }
}
