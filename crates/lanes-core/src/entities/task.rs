use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::column::ColumnId;
use crate::enums::Priority;
use crate::errors::CoreError;

/// A unit of work on a board.
///
/// The column is held once. The stored wire format carries it twice
/// (`columnId` and `status`); both are derived from `column_id` when the task
/// is serialized, see [`TaskRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TaskRecord", try_from = "TaskRecord")]
pub struct Task {
    pub id: String,
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
    pub labels: Vec<String>,
    pub order: u32,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// The column this task is in, under its wire name.
    #[must_use]
    pub const fn status(&self) -> &ColumnId {
        &self.column_id
    }
}

/// Stored JSON shape of a task.
///
/// `columnId` takes precedence over `status` when the two disagree; `status`
/// is only consulted when `columnId` is missing. Optional collections and
/// `priority` fall back to defaults so older payloads still load.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ColumnId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            status: Some(task.column_id.clone()),
            column_id: Some(task.column_id),
            title: task.title,
            description: task.description,
            labels: task.labels,
            order: task.order,
            priority: task.priority,
            due_date: task.due_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = CoreError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let column_id = record.column_id.or(record.status).ok_or_else(|| {
            CoreError::Validation(format!("task {} has neither columnId nor status", record.id))
        })?;
        Ok(Self {
            id: record.id,
            column_id,
            title: record.title,
            description: record.description,
            labels: record.labels,
            order: record.order,
            priority: record.priority,
            due_date: record.due_date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> Task {
        let now = Utc::now();
        Task {
            id: "tsk-1".into(),
            column_id: ColumnId::in_progress(),
            title: "Write docs".into(),
            description: None,
            labels: vec!["Docs".into(), "Docs".into()],
            order: 0,
            priority: Priority::High,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn serializes_both_column_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["columnId"], "InProgress");
        assert_eq!(value["status"], "InProgress");
        assert_eq!(value["priority"], "high");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn column_id_wins_over_drifted_status() {
        let task: Task = serde_json::from_value(json!({
            "id": "tsk-1",
            "columnId": "Done",
            "status": "Todo",
            "title": "Ship",
            "labels": [],
            "order": 3,
            "priority": "low",
            "createdAt": "2025-01-01T00:00:00.000Z",
            "updatedAt": "2025-01-02T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(task.column_id, ColumnId::done());
        assert_eq!(task.status(), &ColumnId::done());
    }

    #[test]
    fn status_used_when_column_id_missing() {
        let task: Task = serde_json::from_value(json!({
            "id": "tsk-1",
            "status": "InProgress",
            "title": "Ship",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(task.column_id, ColumnId::in_progress());
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.labels.is_empty());
    }

    #[test]
    fn task_without_any_column_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({
            "id": "tsk-1",
            "title": "Ship",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip_preserves_task() {
        let task = sample();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
