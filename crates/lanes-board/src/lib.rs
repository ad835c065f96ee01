//! # lanes-board
//!
//! Application state on top of the storage gateway.
//!
//! - [`session::BoardSession`] holds the task list of the active board, loads
//!   it on board switch, and queues a write after every mutation.
//! - [`persist::WriteQueue`] is the single ordered writer shared by every
//!   session and the registry, so a board deletion or reset lands after the
//!   writes queued before it and retires the sessions that still point at it.
//! - [`registry::BoardRegistry`] owns the list of boards, first-run
//!   initialization, creation, deletion, and full reset.
//! - [`storage::BoardStorage`] is the seam both talk to; the libSQL gateway
//!   implements it.

pub mod error;
pub mod persist;
pub mod registry;
pub mod session;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use error::{SessionError, StorageError};
pub use persist::WriteQueue;
pub use registry::{BoardRegistry, CreateBoard};
pub use session::{Bootstrap, BoardSession};
pub use storage::BoardStorage;
