//! Task registry: arena, views, counters and listing policy.
//!
//! # Responsibility
//! - Assign ids, validate drafts and fan new tasks out to every view.
//! - Run the completion/deletion state machine and keep counters exact.
//! - Produce active/completed listings in the supported sort orders.
//!
//! # Invariants
//! - A new task enters the arena and all three views; only deletion and
//!   process-style dequeues take ids out of a view.
//! - Completion is one-way and idempotent; repeats change nothing.
//! - Deletion purges the id from the arena, every view and the completed
//!   log in one call.

use crate::model::task::{Task, TaskDraft, TaskId, TaskValidationError};
use crate::views::priority::PriorityView;
use crate::views::queue::ArrivalQueue;
use crate::views::stack::RecencyStack;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Listing orders for active tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Stack order: most recently added first.
    Recency,
    /// Creation date; direction toggles on every invocation, ascending
    /// first. Equal dates keep recency order.
    DateAdded,
    /// Priority rank ascending, due date then id as tiebreaks.
    Priority,
}

/// Counter snapshot for the stats line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    /// Tasks whose `completed` flag is still false, derived by scan.
    pub active: usize,
    /// Maintained counter; equals `active` at every quiescent point.
    pub in_progress: usize,
    /// Maintained counter of completed tasks still present.
    pub completed: usize,
}

/// Single source of truth for one board session.
///
/// Owns the arena keyed by id; the views hold ids only, so every mutation
/// made here is visible to all of them by construction.
#[derive(Debug)]
pub struct TaskRegistry {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
    recency: RecencyStack,
    arrival: ArrivalQueue,
    urgency: PriorityView,
    in_progress: usize,
    completed: usize,
    /// Completion order, oldest first; listings read it newest first.
    completed_log: Vec<TaskId>,
    date_sort_ascending: bool,
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
            recency: RecencyStack::new(),
            arrival: ArrivalQueue::new(),
            urgency: PriorityView::new(),
            in_progress: 0,
            completed: 0,
            completed_log: Vec::new(),
            date_sort_ascending: true,
        }
    }

    /// Validates a draft and adds it as a new in-progress task.
    ///
    /// # Contract
    /// - `added_on` is the creation date (callers pass today; tests pass
    ///   fixed dates to stay clock-free).
    /// - On validation failure nothing changes anywhere.
    /// - On success the task is present in the arena and all three views.
    pub fn add(
        &mut self,
        draft: TaskDraft,
        added_on: NaiveDate,
    ) -> Result<TaskId, TaskValidationError> {
        if let Err(err) = draft.validate(added_on) {
            warn!("event=task_add module=registry status=rejected reason={err}");
            return Err(err);
        }

        let id = self.next_id;
        self.next_id += 1;

        let task = Task::from_draft(id, added_on, draft);
        let rank = task.priority.rank();
        self.tasks.insert(id, task);
        self.recency.push(id);
        self.arrival.enqueue(id);
        self.urgency.enqueue(id, rank);
        self.in_progress += 1;

        info!("event=task_add module=registry status=ok id={id} rank={rank}");
        Ok(id)
    }

    /// Marks a task completed.
    ///
    /// Returns `false` for unknown ids and for tasks that are already
    /// completed; counters move only on the first transition.
    pub fn complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.get_mut(&id) else {
            debug!("event=task_complete module=registry status=noop id={id} reason=unknown");
            return false;
        };
        if task.completed {
            debug!("event=task_complete module=registry status=noop id={id} reason=repeat");
            return false;
        }

        task.completed = true;
        self.in_progress -= 1;
        self.completed += 1;
        self.completed_log.push(id);

        info!("event=task_complete module=registry status=ok id={id}");
        true
    }

    /// Deletes a task from the arena and every view.
    ///
    /// Unknown ids are a silent no-op returning `false`.
    pub fn delete(&mut self, id: TaskId) -> bool {
        self.remove_record(id).is_some()
    }

    /// Deletes and returns the most recently added task still present.
    ///
    /// The task is removed regardless of completion state. Either the task
    /// disappears from every structure or, when the board is empty, nothing
    /// changes.
    pub fn undo_last_add(&mut self) -> Option<Task> {
        let id = self.recency.peek()?;
        let removed = self.remove_record(id);
        info!("event=task_undo module=registry status=ok id={id}");
        removed
    }

    /// Most recently added task, used by the UI to confirm an undo.
    pub fn last_added(&self) -> Option<&Task> {
        self.recency.peek().and_then(|id| self.tasks.get(&id))
    }

    /// Completes the oldest still-active task in arrival order.
    ///
    /// Ids whose task completed through another path are discarded from the
    /// queue on the way; returns `None` when no active task remains queued.
    pub fn process_next(&mut self) -> Option<TaskId> {
        while let Some(id) = self.arrival.dequeue() {
            if self.tasks.get(&id).is_some_and(Task::is_active) {
                self.complete(id);
                info!("event=task_process module=registry status=ok order=arrival id={id}");
                return Some(id);
            }
        }
        None
    }

    /// Completes the most urgent still-active task.
    ///
    /// Same stale-id policy as [`Self::process_next`], over the priority
    /// view.
    pub fn process_urgent(&mut self) -> Option<TaskId> {
        while let Some(id) = self.urgency.dequeue() {
            if self.tasks.get(&id).is_some_and(Task::is_active) {
                self.complete(id);
                info!("event=task_process module=registry status=ok order=priority id={id}");
                return Some(id);
            }
        }
        None
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Active tasks in the requested order.
    ///
    /// `SortOrder::DateAdded` flips the stored direction on every call,
    /// ascending first.
    pub fn active_tasks(&mut self, order: SortOrder) -> Vec<&Task> {
        let mut listing: Vec<&Task> = self
            .recency
            .iter()
            .filter_map(|id| self.tasks.get(&id))
            .filter(|task| task.is_active())
            .collect();

        match order {
            SortOrder::Recency => {}
            SortOrder::DateAdded => {
                let ascending = self.date_sort_ascending;
                self.date_sort_ascending = !ascending;
                listing.sort_by(|a, b| {
                    if ascending {
                        a.added_on.cmp(&b.added_on)
                    } else {
                        b.added_on.cmp(&a.added_on)
                    }
                });
            }
            SortOrder::Priority => {
                listing.sort_by_key(|task| (task.priority.rank(), task.due_on, task.id));
            }
        }

        listing
    }

    /// Completed tasks, newest-completed first.
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.completed_log
            .iter()
            .rev()
            .filter_map(|id| self.tasks.get(id))
            .collect()
    }

    /// Counter snapshot for the stats line.
    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            active: self.tasks.values().filter(|task| task.is_active()).count(),
            in_progress: self.in_progress,
            completed: self.completed,
        }
    }

    /// Read access for view-level queries.
    pub fn recency(&self) -> &RecencyStack {
        &self.recency
    }

    pub fn arrival(&self) -> &ArrivalQueue {
        &self.arrival
    }

    pub fn urgency(&self) -> &PriorityView {
        &self.urgency
    }

    fn remove_record(&mut self, id: TaskId) -> Option<Task> {
        let Some(task) = self.tasks.remove(&id) else {
            debug!("event=task_delete module=registry status=noop id={id} reason=unknown");
            return None;
        };

        self.recency.remove(id);
        self.arrival.remove(id);
        self.urgency.remove(id);

        if task.completed {
            self.completed -= 1;
            self.completed_log.retain(|&logged| logged != id);
        } else {
            self.in_progress -= 1;
        }

        info!(
            "event=task_delete module=registry status=ok id={id} was_completed={}",
            task.completed
        );
        Some(task)
    }
}
