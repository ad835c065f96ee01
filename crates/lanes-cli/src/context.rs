use std::sync::Arc;

use anyhow::bail;
use lanes_board::{BoardRegistry, BoardSession, WriteQueue};
use lanes_config::LanesConfig;
use lanes_core::entities::Board;
use lanes_db::StorageGateway;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LanesConfig,
    pub queue: WriteQueue<StorageGateway>,
    pub registry: BoardRegistry<StorageGateway>,
}

impl AppContext {
    /// Open storage and load the board list, creating the welcome board on
    /// first run.
    pub async fn init(config: LanesConfig) -> Self {
        warn_unconfigured(&config);

        let storage = Arc::new(StorageGateway::from_config(&config.storage));
        if !storage.is_available().await {
            tracing::warn!("storage is unavailable; changes will not be saved");
        }

        let queue = WriteQueue::spawn(storage);
        let mut registry = BoardRegistry::new(&queue, config.general.default_board_name.clone());
        registry.refresh().await;

        Self {
            config,
            queue,
            registry,
        }
    }

    /// Look up a board by id.
    pub fn board(&self, board_id: &str) -> anyhow::Result<&Board> {
        match self.registry.get(board_id) {
            Some(board) => Ok(board),
            None => bail!("no board with id '{board_id}' (see 'lanes board list')"),
        }
    }

    /// Load a board's tasks into a session.
    pub async fn session(&self, board_id: &str) -> anyhow::Result<BoardSession<StorageGateway>> {
        self.board(board_id)?;
        Ok(BoardSession::open(&self.queue, board_id).await)
    }
}

/// Emit warnings for likely mistyped env var keys that silently fell back to
/// defaults.
fn warn_unconfigured(config: &LanesConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LanesConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = LanesConfig::default();
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let single_underscore = |section: &str| {
        let prefix = format!("LANES_{section}_");
        let nested = format!("LANES_{section}__");
        env_keys
            .iter()
            .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
    };

    let mut warnings = Vec::new();
    if config.storage.path == defaults.storage.path
        && config.storage.enabled == defaults.storage.enabled
        && single_underscore("STORAGE")
    {
        warnings.push(
            "storage config appears default while LANES_STORAGE_* env vars exist. Use double underscores (example: LANES_STORAGE__PATH)."
                .to_string(),
        );
    }
    if config.general.default_board_name == defaults.general.default_board_name
        && config.general.seed_new_boards == defaults.general.seed_new_boards
        && single_underscore("GENERAL")
    {
        warnings.push(
            "general config appears default while LANES_GENERAL_* env vars exist. Use double underscores (example: LANES_GENERAL__SEED_NEW_BOARDS)."
                .to_string(),
        );
    }
    warnings
}
