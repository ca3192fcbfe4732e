//! Domain model for task records.
//!
//! # Responsibility
//! - Define the canonical task shape shared by every container view.
//! - Keep boundary validation next to the data it validates.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` assigned once.
//! - Completion is a one-way transition; deletion is the only removal.

pub mod task;
