//! Application services for owner-scoped task operations.
//!
//! The read side ([`TaskQueryService`]) and write side
//! ([`TaskCommandService`]) sit between callers and a [`TaskStore`]
//! implementation. Every operation takes the calling
//! [`AuthenticatedUser`](crate::auth::domain::AuthenticatedUser) and scopes
//! its store access to that user, so no caller can observe or mutate
//! another user's tasks.
//!
//! [`TaskStore`]: crate::task::ports::TaskStore

mod command;
mod error;
mod query;

pub use command::{
    CreateTaskRequest, EditTaskRequest, TaskCommandService, UpdateTaskStatusRequest,
};
pub use error::{TaskServiceError, TaskServiceResult};
pub use query::TaskQueryService;
