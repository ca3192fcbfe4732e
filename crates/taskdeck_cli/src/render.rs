//! Plain-text rendering for board listings.
//!
//! # Responsibility
//! - Turn task listings and counter snapshots into terminal lines.
//! - Keep all presentation concerns out of the core crate.

use taskdeck_core::{Task, TaskCounts};

const HEADERS: [&str; 6] = ["ID", "Name", "Description", "Due", "Added", "Priority"];

/// Renders a task listing as an aligned table.
///
/// Returns `None` for an empty listing; callers print their own
/// empty-board message.
pub fn render_table(tasks: &[&Task]) -> Option<String> {
    if tasks.is_empty() {
        return None;
    }

    let rows: Vec<[String; 6]> = tasks
        .iter()
        .map(|task| {
            [
                task.id.to_string(),
                task.name.clone(),
                task.description.clone(),
                task.due_on.to_string(),
                task.added_on.to_string(),
                task.priority.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    Some(out)
}

/// Stats line matching the board counter display.
pub fn render_stats(counts: TaskCounts) -> String {
    format!(
        "Tasks: {} | Completed: {} | In Progress: {}",
        counts.active, counts.completed, counts.in_progress
    )
}

/// One-line task summary for notices and confirmations.
pub fn render_summary(task: &Task) -> String {
    format!(
        "#{} {} (due {}, {})",
        task.id, task.name, task.due_on, task.priority
    )
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    for (index, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if index > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // Pad by chars so multi-byte names stay aligned.
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
    }
    // Trim the padding on the last column.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 6]) {
    for (index, width) in widths.iter().enumerate() {
        if index > 0 {
            out.push_str("  ");
        }
        for _ in 0..*width {
            out.push('-');
        }
    }
    out.push('\n');
}
