//! Core theme folder watcher implementation.
//!
//! Contains the [`ThemeWatcher`] struct that monitors theme folders for
//! stylesheet changes using the `notify` crate, with debounced notifications.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use themegen_common::ConfigError;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Watches theme folders and reports which theme needs regenerating.
pub struct ThemeWatcher {
    folders: Vec<PathBuf>,
    debounce: Duration,
}

/// Whether a changed path can affect the list of global stylesheets.
pub fn is_stylesheet_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| !n.starts_with('.') && n.ends_with(".css"))
}

impl ThemeWatcher {
    /// Create a watcher for the given theme folders.
    ///
    /// The index of a folder in `folders` is what gets reported on change.
    pub fn new(folders: Vec<PathBuf>, debounce: Duration) -> Result<Self, ConfigError> {
        if folders.is_empty() {
            return Err(ConfigError::WatchError("no theme folders to watch".into()));
        }

        for folder in &folders {
            if !folder.is_dir() {
                warn!("theme folder {} does not exist, it will not be watched", folder.display());
            }
        }

        Ok(Self { folders, debounce })
    }

    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    /// Watch the folders, sending the index of each changed folder.
    ///
    /// Runs until the notify channel closes. Bursts of events within the
    /// debounce window are coalesced, and each changed folder is sent once
    /// per burst. Only `*.css` entries count, so writing a generated `.js`
    /// module never triggers another run.
    pub async fn watch(&self, tx: broadcast::Sender<usize>) -> Result<(), ConfigError> {
        // Events may carry canonical paths, so match against both spellings.
        let folders: Vec<(usize, PathBuf, PathBuf)> = self
            .folders
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_dir())
            .map(|(i, f)| {
                let canonical = std::fs::canonicalize(f).unwrap_or_else(|_| f.clone());
                (i, f.clone(), canonical)
            })
            .collect();

        if folders.is_empty() {
            return Err(ConfigError::WatchError(
                "none of the theme folders exist".into(),
            ));
        }

        // Bridge the sync notify callback into async. Unbounded: every folder
        // index has to reach the debounce loop.
        let (notify_tx, mut notify_rx) = mpsc::unbounded_channel::<usize>();

        let mut watcher = {
            let folders = folders.clone();

            RecommendedWatcher::new(
                move |result: Result<Event, notify::Error>| match result {
                    Ok(event) => {
                        let relevant = matches!(
                            event.kind,
                            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                        );
                        if !relevant {
                            return;
                        }

                        for path in event.paths.iter().filter(|p| is_stylesheet_path(p)) {
                            let Some(parent) = path.parent() else {
                                continue;
                            };
                            for (index, raw, canonical) in &folders {
                                if parent == raw.as_path() || parent == canonical.as_path() {
                                    debug!("stylesheet change detected: {}", path.display());
                                    let _ = notify_tx.send(*index);
                                }
                            }
                        }
                    }
                    Err(e) => {
                        error!("file watcher error: {e}");
                    }
                },
                notify::Config::default(),
            )
            .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?
        };

        for (_, folder, _) in &folders {
            watcher
                .watch(folder, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    ConfigError::WatchError(format!("failed to watch {}: {e}", folder.display()))
                })?;
            info!("watching theme folder {}", folder.display());
        }

        while let Some(changed) = next_burst(&mut notify_rx, self.debounce).await {
            for index in changed {
                info!("theme folder {} changed", self.folders[index].display());
                if tx.send(index).is_err() {
                    debug!("no receivers for theme change signal");
                }
            }
        }

        Ok(())
    }
}

/// Wait for the next burst of change signals and return every folder index
/// it carried. A burst ends once `debounce` passes after its first signal.
///
/// Returns `None` when the sending side is gone and nothing is pending.
pub(crate) async fn next_burst(
    rx: &mut mpsc::UnboundedReceiver<usize>,
    debounce: Duration,
) -> Option<BTreeSet<usize>> {
    let first = rx.recv().await?;
    let mut changed = BTreeSet::from([first]);

    let window = tokio::time::sleep(debounce);
    tokio::pin!(window);

    loop {
        tokio::select! {
            _ = &mut window => break,
            msg = rx.recv() => match msg {
                Some(index) => {
                    changed.insert(index);
                }
                None => break,
            }
        }
    }

    Some(changed)
}
