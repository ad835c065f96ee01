//! Database error types for lanes-db.

use thiserror::Error;

/// Errors from database operations.
///
/// These never leave [`crate::gateway::StorageGateway`]; its public surface
/// converts them to absent reads and failed writes.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A stored value is not well-formed JSON of the expected shape.
    #[error("Corrupt stored value for '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
