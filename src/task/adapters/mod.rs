//! Persistence adapters for the task module.
//!
//! Concrete implementations of the [`TaskStore`] port. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskStore`]: Thread-safe in-memory storage for
//!   unit testing
//! - [`postgres::PostgresTaskStore`]: Production-grade `PostgreSQL`
//!   persistence using Diesel ORM
//!
//! [`TaskStore`]: crate::task::ports::store::TaskStore

pub mod memory;
pub mod postgres;
