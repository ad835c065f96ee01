//! Per-board task lists and the legacy single-board list.

use chrono::Utc;
use lanes_core::entities::Task;

use crate::LanesDb;
use crate::error::DatabaseError;
use crate::helpers::format_timestamp;

/// Key the pre-multi-board schema stored its task list under.
pub const LEGACY_TASKS_KEY: &str = "tasks";

fn decode_tasks(key: &str, json: &str) -> Result<Vec<Task>, DatabaseError> {
    serde_json::from_str(json).map_err(|source| DatabaseError::Corrupt {
        key: key.to_string(),
        source,
    })
}

impl LanesDb {
    /// Stored task list for `board_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Corrupt` if the stored value is not a task
    /// array, or a query error.
    pub async fn board_tasks(&self, board_id: &str) -> Result<Option<Vec<Task>>, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT tasks FROM board_tasks WHERE board_id = ?1", [board_id])
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let json: String = row.get(0)?;
        decode_tasks(board_id, &json).map(Some)
    }

    /// Overwrite the task list for `board_id` in a single statement.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if encoding or the upsert fails.
    pub async fn put_board_tasks(&self, board_id: &str, tasks: &[Task]) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(tasks)?;
        self.conn
            .execute(
                "INSERT INTO board_tasks (board_id, tasks, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(board_id) DO UPDATE SET tasks = excluded.tasks, updated_at = excluded.updated_at",
                libsql::params![board_id, json, format_timestamp(&Utc::now())],
            )
            .await?;
        Ok(())
    }

    /// Task list left behind by the single-board schema, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Corrupt` if the legacy value is not a task
    /// array, or a query error.
    pub async fn legacy_tasks(&self) -> Result<Option<Vec<Task>>, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT value FROM legacy_store WHERE key = ?1", [LEGACY_TASKS_KEY])
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let json: String = row.get(0)?;
        decode_tasks(LEGACY_TASKS_KEY, &json).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use lanes_core::seed::seed_tasks;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn test_db() -> LanesDb {
        LanesDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn missing_board_reads_none() {
        let db = test_db().await;
        assert_eq!(db.board_tasks("brd-none").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let db = test_db().await;
        let tasks = seed_tasks(Utc::now());
        db.put_board_tasks("brd-1", &tasks).await.unwrap();
        assert_eq!(db.board_tasks("brd-1").await.unwrap(), Some(tasks));
    }

    #[tokio::test]
    async fn put_overwrites_whole_list() {
        let db = test_db().await;
        let tasks = seed_tasks(Utc::now());
        db.put_board_tasks("brd-1", &tasks).await.unwrap();
        db.put_board_tasks("brd-1", &tasks[..2]).await.unwrap();
        assert_eq!(db.board_tasks("brd-1").await.unwrap().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn corrupt_value_is_reported() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO board_tasks (board_id, tasks, updated_at) VALUES ('brd-1', '{\"not\":\"an array\"}', 'x')",
                (),
            )
            .await
            .unwrap();
        let err = db.board_tasks("brd-1").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn legacy_list_is_read_from_legacy_store() {
        let db = test_db().await;
        assert_eq!(db.legacy_tasks().await.unwrap(), None);

        let tasks = seed_tasks(Utc::now());
        db.conn()
            .execute(
                "INSERT INTO legacy_store (key, value) VALUES (?1, ?2)",
                libsql::params![LEGACY_TASKS_KEY, serde_json::to_string(&tasks).unwrap()],
            )
            .await
            .unwrap();
        assert_eq!(db.legacy_tasks().await.unwrap(), Some(tasks));
    }
}
