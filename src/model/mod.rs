//! Task list domain models and business logic
//!
//! This module contains the core data structures and their implementations.
//! It is split into submodules for better organization:
//! - `item`: Item record and priority tag
//! - `task_list`: The authoritative ordered collection and its mutations
//! - `queries`: View filter and derived statistics
//! - `serde_impl`: Serialization/deserialization implementations

mod item;
mod queries;
mod serde_impl;
mod task_list;

// Re-export all public types
pub use item::{Item, Priority, timestamp_now};
pub use queries::{Filter, Stats};
pub use task_list::TaskList;
