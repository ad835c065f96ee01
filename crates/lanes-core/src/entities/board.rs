use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Well-known id of the board seeded on first run.
pub const DEFAULT_BOARD_ID: &str = "welcome-board";
pub const DEFAULT_BOARD_NAME: &str = "Welcome Board";
/// Name given to boards created with a blank name.
pub const UNTITLED_BOARD_NAME: &str = "Untitled board";

/// A named workspace owning one task list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Build a board stamped with `now`, trimming the name and falling back
    /// to [`UNTITLED_BOARD_NAME`] when it is blank.
    #[must_use]
    pub fn new(id: impl Into<String>, name: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: Self::display_name(name),
            created_at: now,
            updated_at: now,
        }
    }

    /// The well-known default board.
    #[must_use]
    pub fn default_board(name: &str, now: DateTime<Utc>) -> Self {
        Self::new(DEFAULT_BOARD_ID, name, now)
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_BOARD_ID
    }

    #[must_use]
    pub fn display_name(name: &str) -> String {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            UNTITLED_BOARD_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
