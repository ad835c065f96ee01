use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the column a task sits in.
///
/// The default board uses `Todo`, `InProgress`, and `Done`, but stored data
/// may reference any column id; unknown ids are still ordered as their own
/// group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub const TODO: &'static str = "Todo";
    pub const IN_PROGRESS: &'static str = "InProgress";
    pub const DONE: &'static str = "Done";

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn todo() -> Self {
        Self::new(Self::TODO)
    }

    #[must_use]
    pub fn in_progress() -> Self {
        Self::new(Self::IN_PROGRESS)
    }

    #[must_use]
    pub fn done() -> Self {
        Self::new(Self::DONE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Definition of this column in the default layout, if it is one.
    #[must_use]
    pub fn definition(&self) -> Option<&'static ColumnDef> {
        KANBAN_COLUMNS.iter().find(|def| def.id == self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ColumnId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Static description of a board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Default column layout, left to right.
pub const KANBAN_COLUMNS: [ColumnDef; 3] = [
    ColumnDef {
        id: ColumnId::TODO,
        title: "To Do",
        description: "Ideas and requests ready for kickoff.",
    },
    ColumnDef {
        id: ColumnId::IN_PROGRESS,
        title: "In Progress",
        description: "Work currently being executed by the team.",
    },
    ColumnDef {
        id: ColumnId::DONE,
        title: "Done",
        description: "Completed deliverables that passed review.",
    },
];

/// Column new tasks land in when none is chosen.
pub const DEFAULT_COLUMN_ID: &str = ColumnId::TODO;
