//! Configuration schema types for themegen.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// File name looked up in the working directory and the user config dir.
pub const CONFIG_FILE_NAME: &str = "themegen.toml";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemegenConfig {
    pub generator: GeneratorConfig,
    pub themes: Vec<ThemeEntry>,
    pub watch: WatchConfig,
    /// Directory relative theme paths are resolved against.
    #[serde(skip)]
    pub root: PathBuf,
}

impl ThemegenConfig {
    /// Find a configured theme by name.
    pub fn theme(&self, name: &str) -> Option<&ThemeEntry> {
        self.themes.iter().find(|t| t.name == name)
    }
}

/// Generator behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Treat identifier diagnostics as errors.
    pub strict: bool,
}

/// One theme to generate a module for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeEntry {
    pub name: String,
    pub folder: PathBuf,
    /// Output file; defaults to `<folder>/<name>.js`.
    pub output: Option<PathBuf>,
}

impl ThemeEntry {
    pub fn new(name: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            output: None,
        }
    }

    /// Theme folder resolved against `root`.
    pub fn folder_in(&self, root: &Path) -> PathBuf {
        root.join(&self.folder)
    }

    /// Output module path resolved against `root`.
    pub fn output_in(&self, root: &Path) -> PathBuf {
        match &self.output {
            Some(output) => root.join(output),
            None => self.folder_in(root).join(format!("{}.js", self.name)),
        }
    }
}

/// Watch mode settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Quiet period before a burst of file events triggers regeneration.
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}
