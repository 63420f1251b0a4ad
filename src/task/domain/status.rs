//! Task status enumeration and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle status of a task.
///
/// The enumeration is closed: status values arriving from callers are
/// parsed with [`TaskStatus::try_from`] and anything outside the three
/// canonical values is rejected. Work moves strictly forward; see
/// [`TaskStatus::can_transition_to`] for the allowed transitions.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::TaskStatus;
///
/// let status = TaskStatus::try_from("IN_PROGRESS").expect("known status");
/// assert_eq!(status, TaskStatus::InProgress);
/// assert!(status.can_transition_to(TaskStatus::Done));
/// assert!(!TaskStatus::Done.can_transition_to(TaskStatus::Open));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Open,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Reports whether a direct transition to `target` is permitted.
    ///
    /// The allowed transitions are `Open -> InProgress`, `Open -> Done`,
    /// and `InProgress -> Done`. Every other pair, including
    /// self-transitions and anything leaving [`TaskStatus::Done`], is
    /// rejected.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::InProgress | Self::Done) | (Self::InProgress, Self::Done)
        )
    }

    /// Reports whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "OPEN" => Ok(Self::Open),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status value is not in the closed enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
