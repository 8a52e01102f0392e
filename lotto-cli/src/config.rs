use anyhow::{Context, Result};
use lotto_core::GameConfig;
use std::path::{Path, PathBuf};

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lotto")
        .join("config.json")
}

/// Flags that override values from the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ticket_cost: Option<i64>,
    pub start_money: Option<i64>,
}

/// Resolve the game configuration.
///
/// An explicit path must exist. The default path is used only if present,
/// otherwise built-in defaults apply. Validation runs once, after overrides.
pub fn load_game_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                tracing::debug!("Loading config from {}", default_path.display());
                GameConfig::load_json_file(&default_path).with_context(|| {
                    format!("Failed to load config from {}", default_path.display())
                })?
            } else {
                GameConfig::default()
            }
        }
    };

    if let Some(ticket_cost) = overrides.ticket_cost {
        config.ticket_cost = ticket_cost;
    }
    if let Some(start_money) = overrides.start_money {
        config.start_money = start_money;
    }

    config.validate()?;
    Ok(config)
}
