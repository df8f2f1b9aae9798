//! Core TOML config loading: read from path or the discovered default.

use crate::schema::ThemegenConfig;
use crate::validation;
use std::path::{Path, PathBuf};
use themegen_common::ConfigError;
use tracing::info;

use super::paths::find_config;

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Relative theme paths are resolved
/// against the file's directory. The result is validated.
pub fn load_from_path(path: &Path) -> Result<ThemegenConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let mut config: ThemegenConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    config.root = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    validation::validate(&config)?;

    info!(
        "loaded config from {} ({} theme(s))",
        path.display(),
        config.themes.len()
    );
    Ok(config)
}

/// Load the discovered config file, or defaults when there is none.
pub fn load_default() -> Result<ThemegenConfig, ConfigError> {
    match find_config() {
        Some(path) => load_from_path(&path),
        None => {
            info!("no config file found, using defaults");
            Ok(ThemegenConfig {
                root: PathBuf::from("."),
                ..Default::default()
            })
        }
    }
}
