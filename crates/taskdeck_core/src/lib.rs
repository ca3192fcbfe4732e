//! Core domain logic for taskdeck.
//! This crate is the single source of truth for board invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod views;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskValidationError};
pub use registry::task_registry::{SortOrder, TaskCounts, TaskRegistry};
pub use views::priority::PriorityView;
pub use views::queue::ArrivalQueue;
pub use views::stack::RecencyStack;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
