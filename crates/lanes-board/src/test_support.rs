//! Shared test utilities for lanes-board unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, TimeZone, Utc};
    use lanes_core::clock::SteppingClock;
    use lanes_core::entities::{Board, Task};
    use lanes_core::errors::CoreError;
    use lanes_core::ids::IdGenerator;
    use lanes_db::StoredTasks;
    use tokio::sync::Notify;

    use crate::error::StorageError;
    use crate::storage::BoardStorage;

    pub fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 10, 8, 0, 0).unwrap()
    }

    pub fn test_clock() -> Arc<SteppingClock> {
        Arc::new(SteppingClock::starting_at(t0()))
    }

    /// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
    #[derive(Default)]
    pub struct SequentialIds {
        next: AtomicUsize,
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self, prefix: &str) -> Result<String, CoreError> {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("{prefix}-{n}"))
        }
    }

    /// In-process storage with switches for failure and read gating.
    #[derive(Default)]
    pub struct MemoryStorage {
        tasks: Mutex<HashMap<String, Vec<Task>>>,
        legacy: Mutex<HashMap<String, Vec<Task>>>,
        boards: Mutex<Vec<Board>>,
        gates: Mutex<HashMap<String, Arc<Notify>>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
        writes: AtomicUsize,
    }

    impl MemoryStorage {
        pub fn stored(&self, board_id: &str) -> Option<Vec<Task>> {
            self.tasks.lock().unwrap().get(board_id).cloned()
        }

        pub fn put(&self, board_id: &str, tasks: Vec<Task>) {
            self.tasks.lock().unwrap().insert(board_id.to_string(), tasks);
        }

        /// Make `tasks` readable for `board_id` only as a legacy list.
        pub fn put_legacy(&self, board_id: &str, tasks: Vec<Task>) {
            self.legacy.lock().unwrap().insert(board_id.to_string(), tasks);
        }

        pub fn boards(&self) -> Vec<Board> {
            self.boards.lock().unwrap().clone()
        }

        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        pub fn fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        /// Block reads of `board_id` until the returned handle is notified.
        pub fn gate(&self, board_id: &str) -> Arc<Notify> {
            let notify = Arc::new(Notify::new());
            self.gates
                .lock()
                .unwrap()
                .insert(board_id.to_string(), Arc::clone(&notify));
            notify
        }
    }

    impl BoardStorage for MemoryStorage {
        async fn read_tasks(&self, board_id: &str) -> Result<StoredTasks, StorageError> {
            let gate = self.gates.lock().unwrap().get(board_id).cloned();
            if let Some(gate) = gate {
                gate.notified().await;
            }
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StorageError("injected read failure".into()));
            }
            if let Some(tasks) = self.stored(board_id) {
                return Ok(StoredTasks::found(tasks));
            }
            let legacy = self.legacy.lock().unwrap().get(board_id).cloned();
            Ok(legacy.map_or_else(StoredTasks::absent, |tasks| StoredTasks {
                tasks: Some(tasks),
                migrated: true,
            }))
        }

        async fn write_tasks(&self, board_id: &str, tasks: &[Task]) -> bool {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return false;
            }
            self.put(board_id, tasks.to_vec());
            true
        }

        async fn read_boards(&self) -> Vec<Board> {
            let mut boards = self.boards();
            boards.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
            boards
        }

        async fn write_board(&self, board: &Board) -> bool {
            if self.fail_writes.load(Ordering::SeqCst) {
                return false;
            }
            let mut boards = self.boards.lock().unwrap();
            boards.retain(|b| b.id != board.id);
            boards.push(board.clone());
            true
        }

        async fn delete_board(&self, board_id: &str) -> bool {
            if self.fail_writes.load(Ordering::SeqCst) {
                return false;
            }
            self.boards.lock().unwrap().retain(|b| b.id != board_id);
            self.tasks.lock().unwrap().remove(board_id);
            true
        }

        async fn clear_all(&self) -> bool {
            if self.fail_writes.load(Ordering::SeqCst) {
                return false;
            }
            self.boards.lock().unwrap().clear();
            self.tasks.lock().unwrap().clear();
            self.legacy.lock().unwrap().clear();
            true
        }
    }
}
