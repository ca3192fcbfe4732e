//! Registry layer: single owner of all task records.
//!
//! # Responsibility
//! - Own the task arena and keep the three container views in sync with it.
//! - Expose query/mutation APIs so any presentation layer can drive the
//!   board without reaching into storage details.
//!
//! # Invariants
//! - Views only ever hold ids that are present in the arena.
//! - Counters move only on real state transitions, never on repeats.

pub mod task_registry;
