//! themegen configuration system.
//!
//! Provides the TOML project config listing the themes to generate, its
//! validation, and a watcher that reports stylesheet changes in theme
//! folders. All config sections use defaults so partial configs work.

pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use schema::{
    GeneratorConfig, ThemeEntry, ThemegenConfig, WatchConfig, CONFIG_FILE_NAME,
    CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{create_default_config, find_config, load_default, load_from_path};
pub use watcher::ThemeWatcher;

use std::path::Path;
use themegen_common::ConfigError;

/// Load the config at `path` if given, otherwise the discovered default.
pub fn load_config(path: Option<&Path>) -> Result<ThemegenConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}
