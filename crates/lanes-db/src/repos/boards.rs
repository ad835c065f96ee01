//! Board metadata rows and the transactional cascades over both tables.

use lanes_core::entities::Board;

use crate::LanesDb;
use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, parse_timestamp};

fn row_to_board(row: &libsql::Row) -> Result<Board, DatabaseError> {
    Ok(Board {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_timestamp(&row.get::<String>(2)?)?,
        updated_at: parse_timestamp(&row.get::<String>(3)?)?,
    })
}

impl LanesDb {
    /// All boards, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_boards(&self) -> Result<Vec<Board>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, name, created_at, updated_at FROM boards ORDER BY created_at, id",
                (),
            )
            .await?;
        let mut boards = Vec::new();
        while let Some(row) = rows.next().await? {
            boards.push(row_to_board(&row)?);
        }
        Ok(boards)
    }

    /// Insert or replace one board row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the upsert fails.
    pub async fn upsert_board(&self, board: &Board) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO boards (id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET name = excluded.name,
                     created_at = excluded.created_at, updated_at = excluded.updated_at",
                libsql::params![
                    board.id.as_str(),
                    board.name.as_str(),
                    format_timestamp(&board.created_at),
                    format_timestamp(&board.updated_at)
                ],
            )
            .await?;
        Ok(())
    }

    /// Remove a board row and its task list in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either delete or the commit fails; nothing
    /// is applied in that case.
    pub async fn delete_board_cascade(&self, board_id: &str) -> Result<(), DatabaseError> {
        let tx = self.conn.transaction().await?;
        tx.execute("DELETE FROM boards WHERE id = ?1", [board_id]).await?;
        tx.execute("DELETE FROM board_tasks WHERE board_id = ?1", [board_id])
            .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Remove every board, every task list, and the legacy list in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any delete or the commit fails; nothing is
    /// applied in that case.
    pub async fn clear_all(&self) -> Result<(), DatabaseError> {
        let tx = self.conn.transaction().await?;
        tx.execute("DELETE FROM boards", ()).await?;
        tx.execute("DELETE FROM board_tasks", ()).await?;
        tx.execute("DELETE FROM legacy_store", ()).await?;
        tx.commit().await?;
        Ok(())
    }
}
