//! Owner-scoped task management.
//!
//! This module implements the task tracking core: creating tasks under an
//! owning user, listing them through status and free-text filters, editing
//! fields, validating status transitions, and deleting. Every read and
//! write is scoped to the owner inside a single store call, so no code
//! path can observe or mutate another user's tasks. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Draft validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query and command services in [`services`]
//!
//! # Example
//!
//! ```
//! use taskboard::task::domain::{Task, TaskFilter, TaskStatus};
//! use taskboard::auth::domain::UserId;
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let task = Task::create("Fix Bug", "Parser breaks on escapes", UserId::new(), &clock);
//! assert_eq!(task.status, TaskStatus::Open);
//!
//! let filter = TaskFilter::new().with_search("fix");
//! assert!(filter.matches(&task));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
