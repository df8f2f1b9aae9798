//! Writing generated modules to disk.

use std::path::Path;
use themegen_common::ThemeError;
use tracing::{debug, info};

/// Write `content` to `path` unless the file already holds exactly that text.
///
/// Leaving an unchanged module untouched keeps downstream file watchers
/// quiet. Returns whether the file was written.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool, ThemeError> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing == content {
            debug!("{} is up to date", path.display());
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ThemeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, content).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote {}", path.display());
    Ok(true)
}
