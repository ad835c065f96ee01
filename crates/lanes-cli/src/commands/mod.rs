pub mod board;
pub mod dispatch;
pub mod shared;
pub mod stats;
pub mod task;
