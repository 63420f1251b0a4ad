//! Domain model for owner-scoped tasks.
//!
//! The task domain models task records, the closed status enumeration and
//! its transition table, and the listing filter, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod filter;
mod ids;
mod status;
mod task;

pub use error::TaskDomainError;
pub use filter::TaskFilter;
pub use ids::TaskId;
pub use status::{ParseTaskStatusError, TaskStatus};
pub use task::Task;
