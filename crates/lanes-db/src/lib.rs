//! # lanes-db
//!
//! Embedded libSQL persistence for lanes boards and task lists.
//!
//! [`LanesDb`] is the raw, fallible database handle. Application code goes
//! through [`gateway::StorageGateway`], which opens the database lazily once,
//! shares the connection, and turns every storage failure into an absent read
//! or an ignored write.

pub mod error;
pub mod gateway;
pub mod helpers;
mod migrations;
pub mod repos;

pub use gateway::{StorageGateway, StorageLocation, StoredTasks};

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and its single connection.
pub struct LanesDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LanesDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let lanes_db = Self { db, conn };
        lanes_db.run_migrations().await?;
        tracing::debug!(path, "opened lanes database");
        Ok(lanes_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> LanesDb {
        LanesDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["legacy_store", "boards", "board_tasks"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // A second run must be a no-op
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn board_ids_are_unique() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO boards (id, name, created_at, updated_at) VALUES ('b', 'B', 'x', 'x')",
                (),
            )
            .await
            .unwrap();
        let duplicate = db
            .conn()
            .execute(
                "INSERT INTO boards (id, name, created_at, updated_at) VALUES ('b', 'B', 'x', 'x')",
                (),
            )
            .await;
        assert!(duplicate.is_err(), "duplicate board id should be rejected");
    }
}
