//! File watcher for regenerating theme modules.
//!
//! Uses the `notify` crate to watch theme folders for stylesheet changes,
//! with a debounce window to avoid rapid regeneration.

mod theme_watcher;


pub use theme_watcher::{is_stylesheet_path, ThemeWatcher};
