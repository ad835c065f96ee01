//! Entity structs for lanes domain objects.
//!
//! Tasks are persisted as JSON arrays keyed by board id; boards map to rows
//! of the `boards` table. Wire structs derive `JsonSchema` so tests can
//! validate stored payloads.

mod board;
mod column;
mod task;

pub use board::{Board, DEFAULT_BOARD_ID, DEFAULT_BOARD_NAME, UNTITLED_BOARD_NAME};
pub use column::{ColumnDef, ColumnId, DEFAULT_COLUMN_ID, KANBAN_COLUMNS};
pub use task::{Task, TaskRecord};
