//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Short task summary.
    pub title: String,
    /// Longer task description.
    pub description: String,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Identifier of the owning user.
    pub owner_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Short task summary.
    pub title: String,
    /// Longer task description.
    pub description: String,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Identifier of the owning user.
    pub owner_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model for the mutable columns of a task record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement task summary.
    pub title: String,
    /// Replacement task description.
    pub description: String,
    /// Replacement lifecycle status in canonical string form.
    pub status: String,
    /// Mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
