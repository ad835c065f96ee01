//! General application configuration.

use lanes_core::entities::DEFAULT_BOARD_NAME;
use serde::{Deserialize, Serialize};

fn default_board_name() -> String {
    DEFAULT_BOARD_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Name given to the board seeded on first run.
    #[serde(default = "default_board_name")]
    pub default_board_name: String,

    /// Whether newly created boards get the example tasks unless told otherwise.
    #[serde(default)]
    pub seed_new_boards: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_board_name: default_board_name(),
            seed_new_boards: false,
        }
    }
}
