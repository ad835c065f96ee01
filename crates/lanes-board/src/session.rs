//! Task list of the active board.
//!
//! A session is `Bootstrapping` while it loads a board and `Ready` once the
//! list is installed. Every mutation while `Ready` installs a normalized list
//! and queues a write of it on the shared [`WriteQueue`]; nothing blocks on
//! storage. Writes made after the board was deleted are dropped by the queue.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lanes_core::clock::{Clock, SystemClock};
use lanes_core::entities::{Board, ColumnId, DEFAULT_BOARD_ID, Task};
use lanes_core::errors::CoreError;
use lanes_core::ids::{IdGenerator, PREFIX_TASK, RandomIds};
use lanes_core::mutation::{self, TaskDraft};
use lanes_core::order::normalize;
use lanes_core::seed::seed_tasks;
use lanes_core::snapshot::BoardSnapshot;
use lanes_db::StoredTasks;
use tokio::sync::Mutex;

use crate::error::SessionError;
use crate::persist::{Lease, WriteQueue};
use crate::storage::BoardStorage;

/// Outcome of loading a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The list was installed and the session is ready.
    Ready,
    /// Another board switch started while this one was reading; its result
    /// was discarded.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Bootstrapping,
    Ready,
}

struct State {
    board_id: String,
    lease: Lease,
    phase: Phase,
    tasks: Vec<Task>,
}

pub struct BoardSession<S: BoardStorage> {
    queue: WriteQueue<S>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    state: Mutex<State>,
    epoch: AtomicU64,
}

impl<S: BoardStorage> BoardSession<S> {
    /// Open a session on `board_id` with the system clock and random ids.
    ///
    /// Writes go through `queue`, shared with the registry.
    pub async fn open(queue: &WriteQueue<S>, board_id: &str) -> Self {
        Self::open_with(queue, Arc::new(SystemClock), Arc::new(RandomIds), board_id).await
    }

    pub async fn open_with(
        queue: &WriteQueue<S>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        board_id: &str,
    ) -> Self {
        let session = Self::unloaded(queue, clock, ids, board_id);
        session.switch_to(board_id).await;
        session
    }

    /// A session that has not started loading `board_id` yet.
    pub fn unloaded(
        queue: &WriteQueue<S>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        board_id: &str,
    ) -> Self {
        Self {
            queue: queue.clone(),
            clock,
            ids,
            state: Mutex::new(State {
                board_id: board_id.to_string(),
                lease: queue.lease(board_id),
                phase: Phase::Bootstrapping,
                tasks: Vec::new(),
            }),
            epoch: AtomicU64::new(0),
        }
    }

    /// Make `board_id` the active board and load it.
    ///
    /// Any load still in flight is superseded. The session may write to
    /// `board_id` until that board is deleted or storage is cleared.
    pub async fn switch_to(&self, board_id: &str) -> Bootstrap {
        let (epoch, lease) = {
            let mut state = self.state.lock().await;
            state.board_id = board_id.to_string();
            state.lease = self.queue.lease(board_id);
            state.phase = Phase::Bootstrapping;
            state.tasks.clear();
            (self.epoch.fetch_add(1, Ordering::SeqCst) + 1, state.lease)
        };
        tracing::debug!(board_id, epoch, "loading board");
        self.load(board_id, epoch, lease).await
    }

    async fn load(&self, board_id: &str, epoch: u64, lease: Lease) -> Bootstrap {
        let is_default = board_id == DEFAULT_BOARD_ID;
        let (tasks, persist) = match self.queue.storage().read_tasks(board_id).await {
            Ok(StoredTasks {
                tasks: Some(tasks),
                migrated,
            }) => (normalize(tasks), migrated),
            Ok(StoredTasks { tasks: None, .. }) if is_default => (seed_tasks(self.clock.now()), true),
            Ok(StoredTasks { tasks: None, .. }) => (Vec::new(), false),
            Err(error) => {
                tracing::warn!(board_id, %error, "falling back to unsaved board contents");
                let tasks = if is_default {
                    seed_tasks(self.clock.now())
                } else {
                    Vec::new()
                };
                (tasks, false)
            }
        };

        let mut state = self.state.lock().await;
        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!(board_id, epoch, "discarding superseded load");
            return Bootstrap::Superseded;
        }
        if persist {
            self.queue.enqueue(board_id, lease, tasks.clone());
        }
        state.tasks = tasks;
        state.phase = Phase::Ready;
        Bootstrap::Ready
    }

    /// Apply a fallible transform to the current list.
    ///
    /// The result is normalized, installed, and queued for persistence.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotReady` while loading, or the transform's
    /// error. Nothing is installed or queued on error.
    pub async fn try_update<F>(&self, f: F) -> Result<Vec<Task>, SessionError>
    where
        F: FnOnce(&[Task]) -> Result<Vec<Task>, CoreError>,
    {
        let mut state = self.state.lock().await;
        if state.phase != Phase::Ready {
            return Err(SessionError::NotReady {
                board_id: state.board_id.clone(),
            });
        }
        let next = normalize(f(&state.tasks)?);
        self.queue.enqueue(&state.board_id, state.lease, next.clone());
        state.tasks.clone_from(&next);
        Ok(next)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotReady` while loading.
    pub async fn update<F>(&self, f: F) -> Result<Vec<Task>, SessionError>
    where
        F: FnOnce(&[Task]) -> Vec<Task>,
    {
        self.try_update(|tasks| Ok(f(tasks))).await
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotReady` while loading.
    pub async fn replace(&self, tasks: Vec<Task>) -> Result<Vec<Task>, SessionError> {
        self.update(|_| tasks).await
    }

    /// Validate `draft` and append it to its column.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Core` for an invalid draft or id failure, or
    /// `SessionError::NotReady`.
    pub async fn add_task(&self, draft: &TaskDraft) -> Result<Task, SessionError> {
        let input = draft.validate()?;
        let id = self.ids.next_id(PREFIX_TASK)?;
        let now = self.clock.now();
        let next = self
            .update(|tasks| mutation::add_task(tasks, input, id.clone(), now))
            .await?;
        find(next, &id)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Core` for an invalid draft or unknown id, or
    /// `SessionError::NotReady`.
    pub async fn edit_task(&self, task_id: &str, draft: &TaskDraft) -> Result<Task, SessionError> {
        let input = draft.validate()?;
        let now = self.clock.now();
        let next = self
            .try_update(|tasks| mutation::edit_task(tasks, task_id, input, now))
            .await?;
        find(next, task_id)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Core` for an unknown id, or
    /// `SessionError::NotReady`.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), SessionError> {
        self.try_update(|tasks| mutation::delete_task(tasks, task_id))
            .await
            .map(|_| ())
    }

    /// Move a task to `index` within `to` (end of the column when `None`).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Core` for an unknown id, or
    /// `SessionError::NotReady`.
    pub async fn move_task(
        &self,
        task_id: &str,
        to: &ColumnId,
        index: Option<usize>,
    ) -> Result<Task, SessionError> {
        let now = self.clock.now();
        let next = self
            .try_update(|tasks| mutation::move_task(tasks, task_id, to, index, now))
            .await?;
        find(next, task_id)
    }

    /// Current list (empty while loading).
    pub async fn tasks(&self) -> Vec<Task> {
        self.state.lock().await.tasks.clone()
    }

    pub async fn is_ready(&self) -> bool {
        self.state.lock().await.phase == Phase::Ready
    }

    pub async fn board_id(&self) -> String {
        self.state.lock().await.board_id.clone()
    }

    /// Summary of the current list under `board`'s name.
    pub async fn snapshot(&self, board: &Board) -> BoardSnapshot {
        let state = self.state.lock().await;
        BoardSnapshot::from_tasks(board, &state.tasks)
    }

    /// Wait for every write queued so far, by any holder of the queue, to be
    /// attempted.
    pub async fn flush(&self) {
        self.queue.flush().await;
    }
}

fn find(tasks: Vec<Task>, id: &str) -> Result<Task, SessionError> {
    tasks
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CoreError::task_not_found(id).into())
}
