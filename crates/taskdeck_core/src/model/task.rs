//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record owned by the registry arena.
//! - Validate boundary input before a `Task` comes into existence.
//!
//! # Invariants
//! - `id` is unique, monotonically increasing and never reused.
//! - `added_on` is set at creation and never changes.
//! - `due_on` is never earlier than `added_on`.
//! - `completed` flips to `true` at most once; there is no un-completion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Urgency level, ordered so that `High` sorts before `Medium` before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Default urgency.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Numeric rank used for ordered insertion and sorting. Lower is more
    /// urgent.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Canonical display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Parses a user-supplied priority label, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" | "h" => Some(Self::High),
            "medium" | "m" => Some(Self::Medium),
            "low" | "l" => Some(Self::Low),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for boundary task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Name is blank after trimming.
    EmptyName,
    /// Description is blank after trimming.
    EmptyDescription,
    /// Due date precedes the creation date.
    DuePrecedesCreation { due: NaiveDate, added: NaiveDate },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be blank"),
            Self::EmptyDescription => write!(f, "task description must not be blank"),
            Self::DuePrecedesCreation { due, added } => {
                write!(f, "due date {due} must not precede creation date {added}")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Boundary input for creating a task.
///
/// The registry turns a validated draft into a `Task` by assigning the next
/// id and stamping the creation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub due_on: NaiveDate,
    pub priority: Priority,
}

impl TaskDraft {
    /// Checks boundary rules against the creation date.
    ///
    /// # Contract
    /// - `name` and `description` must be non-blank after trimming.
    /// - `due_on` must not precede `added_on`.
    /// - A failed validation leaves the draft untouched and causes no state
    ///   change anywhere.
    pub fn validate(&self, added_on: NaiveDate) -> Result<(), TaskValidationError> {
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if self.due_on < added_on {
            return Err(TaskValidationError::DuePrecedesCreation {
                due: self.due_on,
                added: added_on,
            });
        }
        Ok(())
    }
}

/// Canonical task record.
///
/// One logical entity per task: the container views hold `TaskId` values
/// only, so a flag mutated through the registry is visible to every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used by every view and by the UI layer.
    pub id: TaskId,
    pub name: String,
    pub description: String,
    /// Creation date, immutable after construction.
    pub added_on: NaiveDate,
    /// User-supplied target date, `>= added_on`.
    pub due_on: NaiveDate,
    pub priority: Priority,
    /// One-way completion flag.
    pub completed: bool,
}

impl Task {
    /// Builds a task from a validated draft.
    ///
    /// # Invariants
    /// - Trims `name` and `description`.
    /// - `completed` starts as `false`.
    pub(crate) fn from_draft(id: TaskId, added_on: NaiveDate, draft: TaskDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            added_on,
            due_on: draft.due_on,
            priority: draft.priority,
            completed: false,
        }
    }

    /// Returns whether this task should appear in active listings.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
