//! Domain types for the authenticated owner context.
//!
//! These types are consumed by the task subsystem; user account lifecycle
//! (registration, credential changes, deletion) is managed elsewhere.

mod ids;
mod user;

pub use ids::UserId;
pub use user::AuthenticatedUser;
