//! `PostgreSQL` adapters for owner-scoped task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskStore, TaskPgPool};
