//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` instead of stopping
//! at the first one.

use crate::schema::ThemegenConfig;
use themegen_common::ConfigError;

const DEBOUNCE_MS_MIN: u64 = 50;
const DEBOUNCE_MS_MAX: u64 = 10_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ThemegenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    for (i, theme) in config.themes.iter().enumerate() {
        if theme.name.is_empty() {
            errors.push(format!("themes[{i}].name is empty"));
        }
        if theme.folder.as_os_str().is_empty() {
            errors.push(format!("themes[{i}].folder is empty"));
        }
        if config.themes[..i].iter().any(|t| t.name == theme.name) {
            errors.push(format!("themes[{i}].name {:?} is defined twice", theme.name));
        }
    }

    let debounce = config.watch.debounce_ms;
    if !(DEBOUNCE_MS_MIN..=DEBOUNCE_MS_MAX).contains(&debounce) {
        errors.push(format!(
            "watch.debounce_ms = {debounce} is out of range [{DEBOUNCE_MS_MIN}, {DEBOUNCE_MS_MAX}]"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
