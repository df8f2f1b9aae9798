use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to list theme folder {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stylesheet {path}: {source}")]
    ReadCss {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write theme module {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme {theme} has {files} stylesheet(s) but {css} CSS text(s) were given")]
    BundleMismatch {
        theme: String,
        files: usize,
        css: usize,
    },

    #[error("identifier diagnostics: {0}")]
    Diagnostics(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemegenError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_error_display_includes_path() {
        let err = ThemeError::Io {
            path: PathBuf::from("/themes/dark"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to list theme folder /themes/dark: denied"
        );

        let err = ThemeError::ReadCss {
            path: PathBuf::from("/themes/dark/styles.css"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read stylesheet /themes/dark/styles.css: gone"
        );
    }

    #[test]
    fn bundle_mismatch_display_counts_both_sides() {
        let err = ThemeError::BundleMismatch {
            theme: "dark".into(),
            files: 2,
            css: 1,
        };
        assert_eq!(
            err.to_string(),
            "theme dark has 2 stylesheet(s) but 1 CSS text(s) were given"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("themes[0].name is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: themes[0].name is empty"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn themegen_error_from_theme() {
        let theme_err = ThemeError::Diagnostics("collision on fooCss".into());
        let err: ThemegenError = theme_err.into();
        assert!(matches!(err, ThemegenError::Theme(_)));
        assert!(err.to_string().contains("fooCss"));
    }

    #[test]
    fn themegen_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ThemegenError = config_err.into();
        assert!(matches!(err, ThemegenError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn themegen_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ThemegenError = io_err.into();
        assert!(matches!(err, ThemegenError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn themegen_error_other() {
        let err = ThemegenError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
