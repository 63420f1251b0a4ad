//! In-memory adapter implementation for testing.
//!
//! Provides a simple, thread-safe [`TaskStore`] implementation suitable
//! for unit testing without database dependencies.
//!
//! [`TaskStore`]: crate::task::ports::store::TaskStore

mod store;

pub use store::InMemoryTaskStore;
