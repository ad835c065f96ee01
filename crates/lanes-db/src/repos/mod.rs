//! Fallible repository methods on [`crate::LanesDb`].
//!
//! Each module adds methods via `impl LanesDb` blocks. Errors propagate to
//! the gateway, which decides how to degrade.

pub mod board_tasks;
pub mod boards;
