//! Container views over the registry arena.
//!
//! # Responsibility
//! - Provide LIFO, FIFO and priority-ordered access to the same task set.
//! - Store `TaskId` values only; task data lives in the registry arena.
//!
//! # Invariants
//! - A view never holds task data, only ids.
//! - Completion does not remove an id from any view; deletion purges it
//!   from all of them.

pub mod priority;
pub mod queue;
pub mod stack;
