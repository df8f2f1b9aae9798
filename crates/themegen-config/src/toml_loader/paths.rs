//! Config path resolution and default file creation.

use crate::schema::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};
use themegen_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Per-user config file path, e.g. `~/.config/themegen/themegen.toml` on Linux.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("themegen").join(CONFIG_FILE_NAME))
}

/// Locate the config file: `./themegen.toml` first, then the per-user file.
pub fn find_config() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    user_config_path().filter(|path| path.is_file())
}

/// Create a default TOML config file with documentation comments.
///
/// Refuses to overwrite an existing file.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::ValidationError(format!(
            "{} already exists",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
