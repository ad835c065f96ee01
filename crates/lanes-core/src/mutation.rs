//! Pure transforms over a board's task list.
//!
//! Every function takes the current list and returns the next one, already
//! normalized. Callers stamp time and mint ids so the transforms stay
//! deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{ColumnId, DEFAULT_COLUMN_ID, Task};
use crate::enums::Priority;
use crate::errors::CoreError;
use crate::input::{parse_due_date, parse_labels};
use crate::order::{column_len, column_tasks, normalize, to_order};

/// Raw task form values, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub column_id: ColumnId,
    pub priority: Priority,
    /// `YYYY-MM-DD`, blank for none.
    pub due_date: String,
    /// Comma-separated labels.
    pub labels: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            column_id: ColumnId::new(DEFAULT_COLUMN_ID),
            priority: Priority::Medium,
            due_date: String::new(),
            labels: String::new(),
        }
    }
}

impl TaskDraft {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Pre-fill a draft from an existing task for editing.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            column_id: task.column_id.clone(),
            priority: task.priority,
            due_date: crate::input::format_due_date(task.due_date.as_ref()),
            labels: crate::input::format_labels(&task.labels),
        }
    }

    /// Trim and parse the form values.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is blank.
    pub fn validate(&self) -> Result<TaskInput, CoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("task title must not be empty".into()));
        }
        let description = self.description.trim();
        Ok(TaskInput {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            column_id: self.column_id.clone(),
            priority: self.priority,
            due_date: parse_due_date(&self.due_date),
            labels: parse_labels(&self.labels),
        })
    }
}

/// Validated editable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub column_id: ColumnId,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
}

/// Append a new task at the end of its column.
#[must_use]
pub fn add_task(tasks: &[Task], input: TaskInput, id: String, now: DateTime<Utc>) -> Vec<Task> {
    let order = column_len(tasks, &input.column_id);
    let mut next = tasks.to_vec();
    next.push(Task {
        id,
        column_id: input.column_id,
        title: input.title,
        description: input.description,
        labels: input.labels,
        order,
        priority: input.priority,
        due_date: input.due_date,
        created_at: now,
        updated_at: now,
    });
    normalize(next)
}

/// Replace the editable fields of `task_id`.
///
/// A task whose column changes is placed at the end of its new column.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no task has `task_id`.
pub fn edit_task(
    tasks: &[Task],
    task_id: &str,
    input: TaskInput,
    now: DateTime<Utc>,
) -> Result<Vec<Task>, CoreError> {
    let mut next = tasks.to_vec();
    let idx = position_of(&next, task_id)?;

    let column_changed = next[idx].column_id != input.column_id;
    let order = if column_changed {
        column_len(tasks, &input.column_id)
    } else {
        next[idx].order
    };

    let task = &mut next[idx];
    task.title = input.title;
    task.description = input.description;
    task.labels = input.labels;
    task.priority = input.priority;
    task.due_date = input.due_date;
    task.column_id = input.column_id;
    task.order = order;
    task.updated_at = now;

    Ok(normalize(next))
}

/// Remove `task_id`; its former column closes the gap.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no task has `task_id`.
pub fn delete_task(tasks: &[Task], task_id: &str) -> Result<Vec<Task>, CoreError> {
    let idx = position_of(tasks, task_id)?;
    let mut next = tasks.to_vec();
    next.remove(idx);
    Ok(normalize(next))
}

/// Drag-and-drop move of `task_id` into `target` at `target_index`.
///
/// Within one column this is an array move to `target_index`, clamped to the
/// column (`None` means last). Across columns the task is inserted before the
/// task at `target_index` (`None` or out of range means the end). Both
/// affected columns are re-densified. Only the moved task gets `now` as its
/// `updated_at`; a move that lands where it started leaves the list as is.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no task has `task_id`.
pub fn move_task(
    tasks: &[Task],
    task_id: &str,
    target: &ColumnId,
    target_index: Option<usize>,
    now: DateTime<Utc>,
) -> Result<Vec<Task>, CoreError> {
    let mut next = normalize(tasks.to_vec());
    let idx = position_of(&next, task_id)?;
    let source = next[idx].column_id.clone();

    let mut source_ids = ids_in(&next, &source);
    let from = source_ids
        .iter()
        .position(|id| id == task_id)
        .ok_or_else(|| CoreError::task_not_found(task_id))?;

    if &source == target {
        let last = source_ids.len() - 1;
        let to = target_index.map_or(last, |i| i.min(last));
        if to == from {
            return Ok(next);
        }
        let moved = source_ids.remove(from);
        source_ids.insert(to, moved);
        assign_orders(&mut next, &source_ids);
    } else {
        let moved = source_ids.remove(from);
        let mut target_ids = ids_in(&next, target);
        match target_index {
            Some(i) if i < target_ids.len() => target_ids.insert(i, moved),
            _ => target_ids.push(moved),
        }
        next[idx].column_id = target.clone();
        assign_orders(&mut next, &source_ids);
        assign_orders(&mut next, &target_ids);
    }

    next[idx].updated_at = now;
    Ok(next)
}

fn position_of(tasks: &[Task], task_id: &str) -> Result<usize, CoreError> {
    tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| CoreError::task_not_found(task_id))
}

fn ids_in(tasks: &[Task], column: &ColumnId) -> Vec<String> {
    column_tasks(tasks, column)
        .into_iter()
        .map(|t| t.id.clone())
        .collect()
}

fn assign_orders(tasks: &mut [Task], ordered_ids: &[String]) {
    for (position, id) in ordered_ids.iter().enumerate() {
        if let Some(task) = tasks.iter_mut().find(|t| &t.id == id) {
            task.order = to_order(position);
        }
    }
}
