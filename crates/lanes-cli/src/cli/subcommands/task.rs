use clap::{Args, Subcommand};
use lanes_core::entities::DEFAULT_BOARD_ID;

/// Editable task fields. Unset fields keep their current value on edit.
#[derive(Clone, Debug, Default, Args)]
pub struct TaskFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Column id: todo, in-progress, done, or any custom id.
    #[arg(long)]
    pub column: Option<String>,
    /// low, medium, or high.
    #[arg(long)]
    pub priority: Option<String>,
    /// `YYYY-MM-DD`; an empty value clears the due date.
    #[arg(long)]
    pub due: Option<String>,
    /// Comma-separated labels.
    #[arg(long)]
    pub labels: Option<String>,
}

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks by column and order.
    List {
        #[arg(long, default_value = DEFAULT_BOARD_ID)]
        board: String,
        #[arg(long)]
        column: Option<String>,
    },
    /// Add a task at the end of its column.
    Add {
        #[arg(long, default_value = DEFAULT_BOARD_ID)]
        board: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Edit a task.
    Edit {
        id: String,
        #[arg(long, default_value = DEFAULT_BOARD_ID)]
        board: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Delete a task.
    Delete {
        id: String,
        #[arg(long, default_value = DEFAULT_BOARD_ID)]
        board: String,
    },
    /// Move a task to a column position.
    Move {
        id: String,
        #[arg(long, default_value = DEFAULT_BOARD_ID)]
        board: String,
        /// Target column.
        #[arg(long)]
        to: String,
        /// Position in the target column; the end when omitted.
        #[arg(long)]
        index: Option<usize>,
    },
}
