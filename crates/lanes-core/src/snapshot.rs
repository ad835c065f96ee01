//! Read-only board summaries for overview screens.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Board, ColumnId, KANBAN_COLUMNS, Task};
use crate::order::column_tasks;

/// Tasks of one column in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnTasks {
    pub column_id: ColumnId,
    pub tasks: Vec<Task>,
}

/// Per-board counts and highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub id: String,
    pub name: String,
    pub columns: Vec<ColumnTasks>,
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_due_date: Option<DateTime<Utc>>,
}

impl BoardSnapshot {
    /// Summarize `tasks` of `board`.
    ///
    /// Default columns come first in layout order, even when empty; any other
    /// column ids follow in name order.
    #[must_use]
    pub fn from_tasks(board: &Board, tasks: &[Task]) -> Self {
        let mut column_ids: Vec<ColumnId> =
            KANBAN_COLUMNS.iter().map(|def| ColumnId::new(def.id)).collect();
        let mut extra: Vec<ColumnId> = tasks
            .iter()
            .map(|t| t.column_id.clone())
            .filter(|id| id.definition().is_none())
            .collect();
        extra.sort();
        extra.dedup();
        column_ids.extend(extra);

        let columns: Vec<ColumnTasks> = column_ids
            .into_iter()
            .map(|column_id| {
                let tasks = column_tasks(tasks, &column_id).into_iter().cloned().collect();
                ColumnTasks { column_id, tasks }
            })
            .collect();

        let count = |id: &str| tasks.iter().filter(|t| t.column_id.as_str() == id).count();

        Self {
            id: board.id.clone(),
            name: board.name.clone(),
            columns,
            total: tasks.len(),
            todo: count(ColumnId::TODO),
            in_progress: count(ColumnId::IN_PROGRESS),
            done: count(ColumnId::DONE),
            last_updated_at: tasks.iter().map(|t| t.updated_at).max(),
            upcoming_due_date: tasks.iter().filter_map(|t| t.due_date).min(),
        }
    }
}

/// Totals across every board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub boards: usize,
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    /// Percentage of tasks in `Done`, rounded; 0 when there are no tasks.
    pub completion_rate: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl WorkspaceSummary {
    #[must_use]
    pub fn from_snapshots(snapshots: &[BoardSnapshot]) -> Self {
        let mut summary = Self {
            boards: snapshots.len(),
            ..Self::default()
        };
        for snapshot in snapshots {
            summary.total += snapshot.total;
            summary.todo += snapshot.todo;
            summary.in_progress += snapshot.in_progress;
            summary.done += snapshot.done;
            summary.last_updated_at = summary.last_updated_at.max(snapshot.last_updated_at);
        }
        summary.completion_rate = completion_rate(summary.done, summary.total);
        summary
    }
}

fn completion_rate(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Round half up in integer arithmetic.
    let rate = (done * 200 + total) / (total * 2);
    u32::try_from(rate).unwrap_or(100)
}
