//! Interactive board session.
//!
//! # Responsibility
//! - Parse user commands and drive the core registry.
//! - Own the session-scoped confirmation flows (delete, undo).
//!
//! # Invariants
//! - The registry is the only state; nothing here caches task data.
//! - Every user action maps to one registry call sequence; errors are
//!   reported and the session continues.

use crate::render::{render_stats, render_summary, render_table};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use taskdeck_core::{Priority, SortOrder, TaskDraft, TaskId, TaskRegistry};

const PROMPT: &str = "taskdeck> ";

const HELP_TEXT: &str = "\
Commands:
  add                 create a task (prompts for fields)
  list [recency|date|priority]
                      show active tasks; `date` toggles direction per call
  done <id>           mark a task completed
  delete <id>         delete a task (asks for confirmation)
  undo                delete the most recently added task (asks first)
  next                complete the oldest task in arrival order
  urgent              complete the most urgent task
  completed           show completed tasks, newest first
  stats               show the counter line
  export              print all tasks as JSON
  help                show this text
  quit                end the session";

/// One interactive session over generic input/output streams.
///
/// Generic so tests can drive it with in-memory buffers; `main` wires it
/// to stdin/stdout.
pub struct Session<R, W> {
    registry: TaskRegistry,
    input: R,
    output: W,
    today: NaiveDate,
}

enum Command {
    Add,
    List(SortOrder),
    Done(TaskId),
    Delete(TaskId),
    Undo,
    Next,
    Urgent,
    Completed,
    Stats,
    Export,
    Help,
    Quit,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session; `today` is captured once and acts as the
    /// due-date floor for the whole session.
    pub fn new(input: R, output: W, today: NaiveDate) -> Self {
        Self {
            registry: TaskRegistry::new(),
            input,
            output,
            today,
        }
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run(&mut self) -> std::io::Result<()> {
        writeln!(
            self.output,
            "taskdeck {} (`help` lists commands)",
            taskdeck_core::core_version()
        )?;

        loop {
            let Some(line) = self.prompt_line(PROMPT)? else {
                break;
            };
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }

        writeln!(self.output, "{}", render_stats(self.registry.counts()))?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> std::io::Result<()> {
        match command {
            Command::Add => self.add_flow(),
            Command::List(order) => self.list(order),
            Command::Done(id) => self.done(id),
            Command::Delete(id) => self.delete_flow(id),
            Command::Undo => self.undo_flow(),
            Command::Next => self.process(false),
            Command::Urgent => self.process(true),
            Command::Completed => self.completed(),
            Command::Stats => {
                writeln!(self.output, "{}", render_stats(self.registry.counts()))
            }
            Command::Export => self.export(),
            Command::Help => writeln!(self.output, "{HELP_TEXT}"),
            Command::Quit => Ok(()),
        }
    }

    /// Field-by-field creation flow; any bad field aborts with no state
    /// change.
    fn add_flow(&mut self) -> std::io::Result<()> {
        let Some(name) = self.prompt_line("Name: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt_line("Description: ")? else {
            return Ok(());
        };

        let Some(due_raw) = self.prompt_line(&format!("Due date (YYYY-MM-DD, >= {}): ", self.today))?
        else {
            return Ok(());
        };
        let due_on: NaiveDate = match due_raw.trim().parse() {
            Ok(date) => date,
            Err(_) => {
                writeln!(
                    self.output,
                    "`{}` is not a date; expected YYYY-MM-DD. Task not added.",
                    due_raw.trim()
                )?;
                return Ok(());
            }
        };

        let Some(priority_raw) = self.prompt_line("Priority (high/medium/low) [medium]: ")? else {
            return Ok(());
        };
        let priority = if priority_raw.trim().is_empty() {
            Priority::Medium
        } else {
            match Priority::parse(&priority_raw) {
                Some(priority) => priority,
                None => {
                    writeln!(
                        self.output,
                        "`{}` is not a priority; expected high, medium or low. Task not added.",
                        priority_raw.trim()
                    )?;
                    return Ok(());
                }
            }
        };

        let draft = TaskDraft {
            name,
            description,
            due_on,
            priority,
        };
        match self.registry.add(draft, self.today) {
            Ok(id) => {
                let task = self.registry.get(id).expect("just-added task must exist");
                writeln!(self.output, "Added {}", render_summary(task))
            }
            Err(err) => writeln!(self.output, "{err}. Task not added."),
        }
    }

    fn list(&mut self, order: SortOrder) -> std::io::Result<()> {
        let listing = self.registry.active_tasks(order);
        match render_table(&listing) {
            Some(table) => write!(self.output, "{table}"),
            None => writeln!(self.output, "No tasks yet. Add one with `add`."),
        }
    }

    fn done(&mut self, id: TaskId) -> std::io::Result<()> {
        if self.registry.get(id).is_none() {
            return writeln!(self.output, "No task with id {id}.");
        }
        if self.registry.complete(id) {
            let task = self.registry.get(id).expect("completed task must exist");
            writeln!(self.output, "Completed {}", render_summary(task))
        } else {
            writeln!(self.output, "Task {id} is already completed.")
        }
    }

    fn delete_flow(&mut self, id: TaskId) -> std::io::Result<()> {
        let Some(task) = self.registry.get(id) else {
            return writeln!(self.output, "No task with id {id}.");
        };
        let summary = render_summary(task);

        if self.confirm(&format!("Delete {summary}? [y/N]: "))? {
            self.registry.delete(id);
            writeln!(self.output, "Deleted {summary}")
        } else {
            writeln!(self.output, "Kept {summary}")
        }
    }

    fn undo_flow(&mut self) -> std::io::Result<()> {
        let Some(task) = self.registry.last_added() else {
            return writeln!(self.output, "Nothing to undo.");
        };
        let summary = render_summary(task);

        if self.confirm(&format!("Undo last add, deleting {summary}? [y/N]: "))? {
            self.registry.undo_last_add();
            writeln!(self.output, "Deleted {summary}")
        } else {
            writeln!(self.output, "Kept {summary}")
        }
    }

    fn process(&mut self, urgent: bool) -> std::io::Result<()> {
        let processed = if urgent {
            self.registry.process_urgent()
        } else {
            self.registry.process_next()
        };

        match processed {
            Some(id) => {
                let task = self.registry.get(id).expect("processed task must exist");
                writeln!(self.output, "Completed {}", render_summary(task))
            }
            None => writeln!(self.output, "No active tasks to process."),
        }
    }

    fn completed(&mut self) -> std::io::Result<()> {
        let listing = self.registry.completed_tasks();
        match render_table(&listing) {
            Some(table) => write!(self.output, "{table}"),
            None => writeln!(self.output, "No completed tasks yet."),
        }
    }

    fn export(&mut self) -> std::io::Result<()> {
        let active = serde_json::to_value(self.registry.active_tasks(SortOrder::Recency))?;
        let completed = serde_json::to_value(self.registry.completed_tasks())?;
        let document = serde_json::json!({
            "active": active,
            "completed": completed,
        });
        let rendered = serde_json::to_string_pretty(&document)?;
        writeln!(self.output, "{rendered}")
    }

    fn confirm(&mut self, question: &str) -> std::io::Result<bool> {
        let Some(answer) = self.prompt_line(question)? else {
            return Ok(false);
        };
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Writes a prompt and reads one line; `None` on end of input.
    fn prompt_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
    let argument = parts.next();

    if parts.next().is_some() {
        return Err(format!("too many arguments for `{keyword}`; try `help`"));
    }

    match (keyword.as_str(), argument) {
        ("add", None) => Ok(Command::Add),
        ("list", None) => Ok(Command::List(SortOrder::Recency)),
        ("list", Some(order)) => parse_sort_order(order).map(Command::List),
        ("done", Some(id)) => parse_id(&keyword, id).map(Command::Done),
        ("delete", Some(id)) => parse_id(&keyword, id).map(Command::Delete),
        ("undo", None) => Ok(Command::Undo),
        ("next", None) => Ok(Command::Next),
        ("urgent", None) => Ok(Command::Urgent),
        ("completed", None) => Ok(Command::Completed),
        ("stats", None) => Ok(Command::Stats),
        ("export", None) => Ok(Command::Export),
        ("help", None) => Ok(Command::Help),
        ("quit" | "exit", None) => Ok(Command::Quit),
        ("done" | "delete", None) => Err(format!("usage: {keyword} <id>")),
        (other, _) => Err(format!("unknown command `{other}`; try `help`")),
    }
}

fn parse_sort_order(value: &str) -> Result<SortOrder, String> {
    match value.to_ascii_lowercase().as_str() {
        "recency" | "stack" => Ok(SortOrder::Recency),
        "date" => Ok(SortOrder::DateAdded),
        "priority" => Ok(SortOrder::Priority),
        other => Err(format!(
            "unknown sort order `{other}`; expected recency, date or priority"
        )),
    }
}

fn parse_id(keyword: &str, value: &str) -> Result<TaskId, String> {
    value
        .parse()
        .map_err(|_| format!("`{value}` is not a task id; usage: {keyword} <id>"))
}

#[cfg(test)]
mod tests {
    use super::Session;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        "2026-03-01".parse().unwrap()
    }

    fn run_session(script: &str) -> String {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(script.to_string()), &mut output, today());
        session.run().expect("session should not fail on memory IO");
        String::from_utf8(output).expect("session output should be UTF-8")
    }

    #[test]
    fn empty_input_ends_session_with_stats_line() {
        let output = run_session("");
        assert!(output.contains("Tasks: 0 | Completed: 0 | In Progress: 0"));
    }

    #[test]
    fn add_then_list_shows_the_task() {
        let output = run_session("add\npay rent\nmarch invoice\n2026-03-03\nhigh\nlist\nquit\n");
        assert!(output.contains("Added #1 pay rent"));
        assert!(output.contains("pay rent"));
        assert!(output.contains("High"));
    }

    #[test]
    fn rejected_validation_reports_and_keeps_board_empty() {
        let output = run_session("add\n   \nwhatever\n2026-03-03\n\nstats\nquit\n");
        assert!(output.contains("task name must not be blank"));
        assert!(output.contains("Tasks: 0 | Completed: 0 | In Progress: 0"));
    }

    #[test]
    fn due_before_today_is_rejected_at_the_boundary() {
        let output = run_session("add\nlate\ntoo late\n2026-02-20\n\nquit\n");
        assert!(output.contains("must not precede creation date"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let script = "add\nerrand\nbuy stamps\n2026-03-02\nlow\ndelete 1\nn\nstats\ndelete 1\ny\nstats\nquit\n";
        let output = run_session(script);
        assert!(output.contains("Kept #1 errand"));
        assert!(output.contains("Tasks: 1 | Completed: 0 | In Progress: 1"));
        assert!(output.contains("Deleted #1 errand"));
        assert!(output.contains("Tasks: 0 | Completed: 0 | In Progress: 0"));
    }

    #[test]
    fn done_is_reported_once_then_noticed() {
        let script = "add\nship\nrelease build\n2026-03-02\n\ndone 1\ndone 1\nquit\n";
        let output = run_session(script);
        assert!(output.contains("Completed #1 ship"));
        assert!(output.contains("Task 1 is already completed."));
    }

    #[test]
    fn unknown_command_is_reported_and_session_continues() {
        let output = run_session("frobnicate\nstats\nquit\n");
        assert!(output.contains("unknown command `frobnicate`"));
        assert!(output.contains("Tasks: 0"));
    }
}
