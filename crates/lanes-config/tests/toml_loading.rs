//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lanes_config::LanesConfig;

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
enabled = true
path = "./boards.db"
"#,
        )?;

        let config: LanesConfig = Figment::from(Serialized::defaults(LanesConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.storage.enabled);
        assert_eq!(config.storage.database_path().as_deref(), Some("./boards.db"));
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lanes")?;
        jail.create_file(
            ".lanes/config.toml",
            r#"
[general]
default_board_name = "Team Board"
seed_new_boards = true
"#,
        )?;

        let config = LanesConfig::load().expect("config loads");
        assert_eq!(config.general.default_board_name, "Team Board");
        assert!(config.general.seed_new_boards);
        Ok(())
    });
}

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lanes")?;
        jail.create_file(
            ".lanes/config.toml",
            r#"
[storage]
path = "./from-file.db"
"#,
        )?;
        jail.set_env("LANES_STORAGE__PATH", ":memory:");

        let config = LanesConfig::load().expect("config loads");
        assert_eq!(config.storage.path, ":memory:");
        Ok(())
    });
}

#[test]
fn env_can_disable_storage() {
    Jail::expect_with(|jail| {
        jail.set_env("LANES_STORAGE__ENABLED", "false");

        let config = LanesConfig::load().expect("config loads");
        assert!(!config.storage.enabled);
        assert_eq!(config.storage.database_path(), None);
        Ok(())
    });
}

#[test]
fn blank_board_name_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LANES_GENERAL__DEFAULT_BOARD_NAME", " ");
        assert!(LanesConfig::load().is_err());
        Ok(())
    });
}
