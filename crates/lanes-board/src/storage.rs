//! The storage seam used by sessions and the registry.

use std::future::Future;

use lanes_core::entities::{Board, Task};
use lanes_db::{StorageGateway, StoredTasks};

use crate::error::StorageError;

/// Durable per-board storage.
///
/// Writes report success as `bool` and never fail loudly; reads may report
/// an unexpected failure so a session can fall back without persisting.
pub trait BoardStorage: Send + Sync + 'static {
    fn read_tasks(
        &self,
        board_id: &str,
    ) -> impl Future<Output = Result<StoredTasks, StorageError>> + Send;

    fn write_tasks(&self, board_id: &str, tasks: &[Task]) -> impl Future<Output = bool> + Send;

    fn read_boards(&self) -> impl Future<Output = Vec<Board>> + Send;

    fn write_board(&self, board: &Board) -> impl Future<Output = bool> + Send;

    /// Remove a board and its task list together.
    fn delete_board(&self, board_id: &str) -> impl Future<Output = bool> + Send;

    /// Remove every board, every task list, and the legacy list.
    fn clear_all(&self) -> impl Future<Output = bool> + Send;
}

impl BoardStorage for StorageGateway {
    async fn read_tasks(&self, board_id: &str) -> Result<StoredTasks, StorageError> {
        Ok(Self::read_tasks(self, board_id).await)
    }

    async fn write_tasks(&self, board_id: &str, tasks: &[Task]) -> bool {
        Self::write_tasks(self, board_id, tasks).await
    }

    async fn read_boards(&self) -> Vec<Board> {
        Self::read_boards(self).await
    }

    async fn write_board(&self, board: &Board) -> bool {
        Self::write_board(self, board).await
    }

    async fn delete_board(&self, board_id: &str) -> bool {
        Self::delete_board(self, board_id).await
    }

    async fn clear_all(&self) -> bool {
        Self::clear_all(self).await
    }
}
