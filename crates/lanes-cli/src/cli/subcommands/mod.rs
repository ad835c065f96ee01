mod board;
mod task;

pub use board::BoardCommands;
pub use task::{TaskCommands, TaskFields};
