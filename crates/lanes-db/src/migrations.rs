//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::LanesDb;
use crate::error::DatabaseError;

/// Pre-multi-board key/value table, kept as a migration source.
const MIGRATION_001: &str = include_str!("../migrations/001_legacy_store.sql");
/// Board metadata and per-board task lists.
const MIGRATION_002: &str = include_str!("../migrations/002_boards.sql");

impl LanesDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_legacy_store: {e}")))?;
        self.conn
            .execute_batch(MIGRATION_002)
            .await
            .map_err(|e| DatabaseError::Migration(format!("002_boards: {e}")))?;
        Ok(())
    }
}
