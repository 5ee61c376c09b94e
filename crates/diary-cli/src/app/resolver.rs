//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_store_path, read_config, DiaryConfig};
use crate::errors::CliError;

/// Resolve the config file path, checking the DIARY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DIARY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if one exists.
pub fn load_config() -> anyhow::Result<Option<DiaryConfig>> {
    let path = resolve_config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    read_config(&path).map(Some)
}

/// Resolve the store path: `--store`/`DIARY_STORE`, then config, then default.
pub fn resolve_store_path(
    store_flag: Option<&str>,
    config: Option<&DiaryConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = store_flag {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.storage.path));
    }
    default_store_path()
}

/// Not-found error for an entry id.
pub fn not_found_entry(id: &str) -> CliError {
    CliError::not_found(
        format!("Entry not found: {}", id),
        "Hint: Run `diary day` or `diary search <TAG>` to find entry IDs.",
    )
}
