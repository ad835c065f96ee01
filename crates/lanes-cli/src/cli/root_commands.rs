use clap::Subcommand;

use super::subcommands::{BoardCommands, TaskCommands};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage boards.
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
    /// Manage the tasks of a board.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Per-board counts and a workspace summary.
    Stats,
}
