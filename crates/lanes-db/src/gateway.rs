//! Degrading storage facade over [`LanesDb`].
//!
//! The gateway owns the lazily opened database. Every failure below it is
//! logged and turned into an absent read or a `false` write, so callers
//! never have to handle storage errors.

use std::path::Path;

use lanes_config::{IN_MEMORY_PATH, StorageConfig};
use lanes_core::entities::{Board, DEFAULT_BOARD_ID, Task};
use tokio::sync::OnceCell;

use crate::LanesDb;
use crate::error::DatabaseError;

/// Where the gateway keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// No persistence. Reads are absent and writes are no-ops.
    Disabled,
    /// A local database file, or `:memory:`.
    Local(String),
}

impl StorageLocation {
    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        config.database_path().map_or(Self::Disabled, Self::Local)
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::Local(IN_MEMORY_PATH.to_string())
    }
}

/// Result of [`StorageGateway::read_tasks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTasks {
    /// The stored list, or `None` when nothing usable is stored.
    pub tasks: Option<Vec<Task>>,
    /// Set when the list came from the legacy single-board key and has not
    /// been written under the board's own key yet.
    pub migrated: bool,
}

impl StoredTasks {
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            tasks: None,
            migrated: false,
        }
    }

    #[must_use]
    pub const fn found(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Some(tasks),
            migrated: false,
        }
    }

    const fn legacy(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Some(tasks),
            migrated: true,
        }
    }
}

/// Shared, lazily opened storage handle.
///
/// The database is opened on first use; concurrent first callers wait on the
/// same open. A failed open is remembered, and the handle then stays
/// unavailable until [`Self::reset`].
pub struct StorageGateway {
    location: StorageLocation,
    db: OnceCell<Option<LanesDb>>,
}

impl StorageGateway {
    #[must_use]
    pub const fn new(location: StorageLocation) -> Self {
        Self {
            location,
            db: OnceCell::const_new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(StorageLocation::from_config(config))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(StorageLocation::in_memory())
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(StorageLocation::Disabled)
    }

    #[must_use]
    pub const fn location(&self) -> &StorageLocation {
        &self.location
    }

    async fn db(&self) -> Option<&LanesDb> {
        self.db
            .get_or_init(|| open(&self.location))
            .await
            .as_ref()
    }

    /// Whether the database could be opened.
    pub async fn is_available(&self) -> bool {
        self.db().await.is_some()
    }

    /// Drop the cached connection. The next call opens the database again.
    pub fn reset(&mut self) {
        if self.db.take().is_some() {
            tracing::debug!("storage gateway reset");
        }
    }

    /// Task list stored for `board_id`.
    ///
    /// For the default board, falls back to the legacy single-board list when
    /// the board's own entry is missing or unreadable.
    pub async fn read_tasks(&self, board_id: &str) -> StoredTasks {
        let Some(db) = self.db().await else {
            return StoredTasks::absent();
        };

        match db.board_tasks(board_id).await {
            Ok(Some(tasks)) => return StoredTasks::found(tasks),
            Ok(None) => {}
            Err(error) => tracing::warn!(board_id, %error, "ignoring unreadable board tasks"),
        }

        if board_id != DEFAULT_BOARD_ID {
            return StoredTasks::absent();
        }

        match db.legacy_tasks().await {
            Ok(Some(tasks)) => {
                tracing::debug!(count = tasks.len(), "found legacy task list");
                StoredTasks::legacy(tasks)
            }
            Ok(None) => StoredTasks::absent(),
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable legacy task list");
                StoredTasks::absent()
            }
        }
    }

    /// Overwrite the task list for `board_id`.
    pub async fn write_tasks(&self, board_id: &str, tasks: &[Task]) -> bool {
        let Some(db) = self.db().await else {
            return false;
        };
        report(
            db.put_board_tasks(board_id, tasks).await,
            "write_tasks",
            board_id,
        )
    }

    /// All stored boards, oldest first. Empty when storage is unavailable.
    pub async fn read_boards(&self) -> Vec<Board> {
        let Some(db) = self.db().await else {
            return Vec::new();
        };
        db.list_boards().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to read boards");
            Vec::new()
        })
    }

    pub async fn write_board(&self, board: &Board) -> bool {
        let Some(db) = self.db().await else {
            return false;
        };
        report(db.upsert_board(board).await, "write_board", &board.id)
    }

    /// Remove a board and its task list atomically.
    pub async fn delete_board(&self, board_id: &str) -> bool {
        let Some(db) = self.db().await else {
            return false;
        };
        report(
            db.delete_board_cascade(board_id).await,
            "delete_board",
            board_id,
        )
    }

    /// Remove every board, every task list, and the legacy list atomically.
    pub async fn clear_all(&self) -> bool {
        let Some(db) = self.db().await else {
            return false;
        };
        report(db.clear_all().await, "clear_all", "*")
    }
}

async fn open(location: &StorageLocation) -> Option<LanesDb> {
    let StorageLocation::Local(path) = location else {
        tracing::debug!("storage disabled");
        return None;
    };

    if path != IN_MEMORY_PATH {
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(error) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!(path, %error, "cannot create storage directory");
                return None;
            }
        }
    }

    match LanesDb::open_local(path).await {
        Ok(db) => Some(db),
        Err(error) => {
            tracing::warn!(path, %error, "storage unavailable");
            None
        }
    }
}

fn report(result: Result<(), DatabaseError>, op: &str, board_id: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(op, board_id, %error, "storage write failed");
            false
        }
    }
}
