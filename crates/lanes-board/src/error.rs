//! Error types for board sessions.

use lanes_core::errors::CoreError;
use thiserror::Error;

/// Errors from [`crate::session::BoardSession`] mutations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The active board is still loading.
    #[error("board '{board_id}' is still loading")]
    NotReady { board_id: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A storage read that failed in a way the caller should know about.
///
/// The libSQL gateway never produces this; it degrades to absent reads.
#[derive(Debug, Error)]
#[error("storage read failed: {0}")]
pub struct StorageError(pub String);
