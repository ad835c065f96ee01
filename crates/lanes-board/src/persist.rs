//! Ordered persistence.
//!
//! One writer task per storage handle drains an unbounded channel, so task
//! writes, board deletions and full clears reach storage in the order they
//! were queued. Sessions and the registry share the same [`WriteQueue`].
//!
//! A task write carries the `Lease` its session took when it loaded the
//! board. Deleting the board, or clearing everything, retires the lease and
//! the writer drops any write still made under it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lanes_core::entities::Task;
use tokio::sync::{mpsc, oneshot};

use crate::storage::BoardStorage;

enum Command {
    Write {
        board_id: String,
        lease: Lease,
        tasks: Vec<Task>,
    },
    DeleteBoard {
        board_id: String,
        done: oneshot::Sender<bool>,
    },
    ClearAll(oneshot::Sender<bool>),
    Flush(oneshot::Sender<()>),
}

/// Write permission for one board, valid until that board is deleted or
/// storage is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lease {
    cleared: u64,
    board: u64,
}

#[derive(Default)]
struct Generations {
    cleared: u64,
    boards: HashMap<String, u64>,
}

impl Generations {
    fn lease(&self, board_id: &str) -> Lease {
        Lease {
            cleared: self.cleared,
            board: self.boards.get(board_id).copied().unwrap_or_default(),
        }
    }

    fn retire(&mut self, board_id: &str) {
        *self.boards.entry(board_id.to_string()).or_default() += 1;
    }

    fn retire_all(&mut self) {
        self.cleared += 1;
        self.boards.clear();
    }
}

fn lock(generations: &Mutex<Generations>) -> MutexGuard<'_, Generations> {
    generations.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to the single writer of a storage backend.
///
/// Cloning is cheap; the writer exits once every handle is dropped and every
/// queued command has been attempted.
pub struct WriteQueue<S: BoardStorage> {
    storage: Arc<S>,
    sender: mpsc::UnboundedSender<Command>,
    generations: Arc<Mutex<Generations>>,
}

impl<S: BoardStorage> Clone for WriteQueue<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            sender: self.sender.clone(),
            generations: Arc::clone(&self.generations),
        }
    }
}

impl<S: BoardStorage> WriteQueue<S> {
    /// Spawn the writer on the current tokio runtime.
    #[must_use]
    pub fn spawn(storage: Arc<S>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let generations = Arc::new(Mutex::new(Generations::default()));
        tokio::spawn(writer_loop(
            Arc::clone(&storage),
            Arc::clone(&generations),
            receiver,
        ));
        Self {
            storage,
            sender,
            generations,
        }
    }

    #[must_use]
    pub const fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    pub(crate) fn lease(&self, board_id: &str) -> Lease {
        lock(&self.generations).lease(board_id)
    }

    pub(crate) fn enqueue(&self, board_id: &str, lease: Lease, tasks: Vec<Task>) {
        let command = Command::Write {
            board_id: board_id.to_string(),
            lease,
            tasks,
        };
        if self.sender.send(command).is_err() {
            tracing::warn!(board_id, "persistence writer is gone; dropping write");
        }
    }

    /// Delete a board and its task list after every write queued before
    /// this call.
    pub(crate) async fn delete_board(&self, board_id: &str) -> bool {
        lock(&self.generations).retire(board_id);
        let (done, wait) = oneshot::channel();
        let command = Command::DeleteBoard {
            board_id: board_id.to_string(),
            done,
        };
        if self.sender.send(command).is_err() {
            tracing::warn!(board_id, "persistence writer is gone; board not deleted");
            return false;
        }
        wait.await.unwrap_or(false)
    }

    /// Clear all stored data after every write queued before this call.
    pub(crate) async fn clear_all(&self) -> bool {
        lock(&self.generations).retire_all();
        let (done, wait) = oneshot::channel();
        if self.sender.send(Command::ClearAll(done)).is_err() {
            tracing::warn!("persistence writer is gone; storage not cleared");
            return false;
        }
        wait.await.unwrap_or(false)
    }

    /// Wait until everything queued before this call has been attempted.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.sender.send(Command::Flush(done)).is_err() {
            return;
        }
        let _ = wait.await;
    }
}

async fn writer_loop<S: BoardStorage>(
    storage: Arc<S>,
    generations: Arc<Mutex<Generations>>,
    mut receiver: mpsc::UnboundedReceiver<Command>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            Command::Write {
                board_id,
                lease,
                tasks,
            } => {
                if lock(&generations).lease(&board_id) != lease {
                    tracing::debug!(board_id, "board was deleted; dropping write");
                    continue;
                }
                if !storage.write_tasks(&board_id, &tasks).await {
                    tracing::warn!(board_id, count = tasks.len(), "failed to persist tasks");
                }
            }
            Command::DeleteBoard { board_id, done } => {
                let deleted = storage.delete_board(&board_id).await;
                if !deleted {
                    tracing::warn!(board_id, "failed to delete board");
                }
                let _ = done.send(deleted);
            }
            Command::ClearAll(done) => {
                let _ = done.send(storage.clear_all().await);
            }
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("persistence writer stopped");
}
