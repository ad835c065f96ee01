//! ID prefixes and random identifier generation.
//!
//! Generated IDs look like `tsk-5f0c…` (prefix, dash, 32 lowercase hex chars
//! from 16 bytes of OS randomness).

use std::fmt::Write as _;

use crate::errors::CoreError;

pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_BOARD: &str = "brd";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_TASK, PREFIX_BOARD];

/// Number of random bytes behind every generated ID.
const ID_BYTES: usize = 16;

/// Produce a fresh `{prefix}-{hex}` identifier.
///
/// # Errors
///
/// Returns `CoreError::Entropy` if the OS random source fails.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; ID_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Entropy(e.to_string()))?;

    let mut id = String::with_capacity(prefix.len() + 1 + ID_BYTES * 2);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    Ok(id)
}

/// Collision-resistant identifier source.
pub trait IdGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns `CoreError` if no identifier can be produced.
    fn next_id(&self, prefix: &str) -> Result<String, CoreError>;
}

/// OS-randomness backed generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self, prefix: &str) -> Result<String, CoreError> {
        generate_id(prefix)
    }
}
