//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# themegen configuration
# Schema version 1
# Relative paths are resolved against the directory of this file.

[generator]
# strict = false          # fail when a stylesheet name cannot be imported cleanly

# One [[themes]] table per theme folder.
# [[themes]]
# name = "my-theme"
# folder = "frontend/themes/my-theme"
# output = "frontend/themes/my-theme/my-theme.js"   # default: <folder>/<name>.js

[watch]
# debounce_ms = 300       # 50-10000
"##
    .to_string()
}
