use clap::Subcommand;

/// Board commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BoardCommands {
    /// List boards, oldest first.
    List,
    /// Create a board.
    Create {
        name: String,
        /// Fill the board with the example tasks.
        #[arg(long)]
        seed: bool,
    },
    /// Delete a board and its tasks.
    Delete { id: String },
    /// Delete all boards and tasks, then recreate the welcome board.
    Reset,
}
