//! Cross-cutting error types for lanes.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The binary converges everything on `anyhow`.

use thiserror::Error;

/// Errors raised by the pure task-list operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation at the edit boundary or on the wire.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The OS random source could not produce an identifier.
    #[error("Random source unavailable: {0}")]
    Entropy(String),
}

impl CoreError {
    /// Shorthand for a missing task.
    #[must_use]
    pub fn task_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "task".to_string(),
            id: id.to_string(),
        }
    }
}
