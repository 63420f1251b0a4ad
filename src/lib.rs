//! Taskboard: owner-scoped task tracking core.
//!
//! This crate provides the domain core of a multi-user task tracker:
//! authenticated users create, query, edit, and delete the tasks they own,
//! and task status changes are validated against a closed transition table.
//! Transport routing, credential verification, and storage engines live
//! outside the crate and talk to it through explicit seams.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`auth`]: Authenticated owner identity consumed by the task core
//! - [`task`]: Task records, status machine, stores, and services

pub mod auth;
pub mod task;
