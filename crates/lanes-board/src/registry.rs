//! The list of boards.
//!
//! The registry keeps an in-memory copy of the stored boards so the
//! front end can render without waiting on storage, and writes through on
//! every change. Deletions and full resets go through the shared
//! [`WriteQueue`], behind any task writes sessions have already queued.

use std::sync::Arc;

use lanes_core::clock::{Clock, SystemClock};
use lanes_core::entities::{Board, DEFAULT_BOARD_ID};
use lanes_core::errors::CoreError;
use lanes_core::ids::{IdGenerator, PREFIX_BOARD, RandomIds};
use lanes_core::seed::seed_tasks;

use crate::persist::WriteQueue;
use crate::storage::BoardStorage;

/// Options for [`BoardRegistry::create`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateBoard {
    /// Fill the new board with the example task set.
    pub seed: bool,
}

pub struct BoardRegistry<S: BoardStorage> {
    storage: Arc<S>,
    queue: WriteQueue<S>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    default_name: String,
    boards: Vec<Board>,
    loaded: bool,
}

impl<S: BoardStorage> BoardRegistry<S> {
    pub fn new(queue: &WriteQueue<S>, default_name: impl Into<String>) -> Self {
        Self::with_collaborators(queue, Arc::new(SystemClock), Arc::new(RandomIds), default_name)
    }

    pub fn with_collaborators(
        queue: &WriteQueue<S>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        default_name: impl Into<String>,
    ) -> Self {
        Self {
            storage: Arc::clone(queue.storage()),
            queue: queue.clone(),
            clock,
            ids,
            default_name: default_name.into(),
            boards: Vec::new(),
            loaded: false,
        }
    }

    /// First-run setup. Idempotent.
    ///
    /// When no boards are stored, writes the default board and, unless it
    /// already has tasks (including a legacy list), the seed set. Returns the
    /// default board when it was created by this call.
    pub async fn ensure_initialized(&self) -> Option<Board> {
        if !self.storage.read_boards().await.is_empty() {
            return None;
        }

        let now = self.clock.now();
        let board = Board::default_board(&self.default_name, now);
        self.storage.write_board(&board).await;

        let has_tasks = self
            .storage
            .read_tasks(DEFAULT_BOARD_ID)
            .await
            .is_ok_and(|stored| stored.tasks.is_some());
        if !has_tasks {
            self.storage.write_tasks(DEFAULT_BOARD_ID, &seed_tasks(now)).await;
        }
        tracing::debug!(board_id = DEFAULT_BOARD_ID, "initialized default board");
        Some(board)
    }

    /// Initialize if needed and reload the board list.
    ///
    /// Keeps the in-memory list when storage has nothing to offer, so boards
    /// still work for the process lifetime without persistence.
    pub async fn refresh(&mut self) -> &[Board] {
        let created = self.ensure_initialized().await;
        let stored = self.storage.read_boards().await;

        if !stored.is_empty() {
            self.boards = stored;
        } else if self.boards.is_empty() {
            let now = self.clock.now();
            self.boards
                .push(created.unwrap_or_else(|| Board::default_board(&self.default_name, now)));
        }
        self.loaded = true;
        &self.boards
    }

    /// Boards, oldest first.
    #[must_use]
    pub fn list(&self) -> &[Board] {
        &self.boards
    }

    /// True until the first [`Self::refresh`] completes.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        !self.loaded
    }

    #[must_use]
    pub fn get(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    /// Create and persist a board. A blank name becomes "Untitled board".
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if no id can be generated.
    pub async fn create(&mut self, name: &str, options: CreateBoard) -> Result<Board, CoreError> {
        let id = self.ids.next_id(PREFIX_BOARD)?;
        let now = self.clock.now();
        let board = Board::new(id, name, now);

        self.storage.write_board(&board).await;
        if options.seed {
            self.storage.write_tasks(&board.id, &seed_tasks(now)).await;
        }
        tracing::debug!(board_id = %board.id, seed = options.seed, "created board");

        self.boards.push(board.clone());
        Ok(board)
    }

    /// Delete a board with its tasks.
    ///
    /// Returns `false`, changing nothing, when `board_id` is unknown or is
    /// the only board left. Task writes already queued for the board land
    /// first and are removed with it; later ones are dropped.
    pub async fn delete(&mut self, board_id: &str) -> bool {
        let Some(index) = self.boards.iter().position(|b| b.id == board_id) else {
            tracing::debug!(board_id, "refusing to delete unknown board");
            return false;
        };
        if self.boards.len() <= 1 {
            tracing::debug!(board_id, "refusing to delete the last board");
            return false;
        }

        self.queue.delete_board(board_id).await;
        self.boards.remove(index);
        true
    }

    /// Clear all stored data and start over with a freshly seeded default
    /// board.
    ///
    /// Sessions opened before the reset can no longer write.
    pub async fn reset(&mut self) -> &[Board] {
        if !self.queue.clear_all().await {
            tracing::warn!("storage could not be cleared");
        }
        self.boards.clear();
        self.loaded = false;
        self.refresh().await
    }
}
