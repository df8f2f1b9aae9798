//! Theme folder scanning.
//!
//! Lists the global stylesheets of a theme: the non-directory entries directly
//! inside the folder whose names match `*.css`. Subdirectories are never
//! visited.

use crate::camel_case::camel_case;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use themegen_common::ThemeError;
use tracing::{debug, warn};

/// Global stylesheet that is always added to the document as well.
pub const DOCUMENT_CSS: &str = "document.css";

/// A stylesheet at the top level of a theme folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalCssFile {
    /// File name relative to the theme folder.
    pub file_name: String,
    /// Binding used when importing the file.
    pub identifier: String,
}

impl GlobalCssFile {
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let identifier = camel_case(&file_name);
        Self {
            file_name,
            identifier,
        }
    }

    /// Whether this stylesheet also goes into the global document.
    pub fn is_document_css(&self) -> bool {
        self.file_name == DOCUMENT_CSS
    }
}

/// Whether a file name matches `*.css`, with `*` not matching a leading dot.
pub fn is_global_css_name(name: &str) -> bool {
    !name.starts_with('.') && name.ends_with(".css")
}

/// List the global stylesheets in `folder`, sorted by file name.
///
/// A missing folder has no stylesheets. Any other listing failure is returned
/// as [`ThemeError::Io`].
pub fn scan_theme_folder(folder: &Path) -> Result<Vec<GlobalCssFile>, ThemeError> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("theme folder {} does not exist", folder.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ThemeError::Io {
                path: folder.to_path_buf(),
                source,
            })
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ThemeError::Io {
            path: folder.to_path_buf(),
            source,
        })?;

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(
                    "skipping non UTF-8 file name {:?} in {}",
                    raw,
                    folder.display()
                );
                continue;
            }
        };

        if !is_global_css_name(&name) {
            continue;
        }

        // Follow symlinks; a dangling link is kept like any other file.
        let is_dir = match fs::metadata(entry.path()) {
            Ok(meta) => meta.is_dir(),
            Err(_) => entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
        };
        if is_dir {
            debug!("skipping directory {name} in {}", folder.display());
            continue;
        }

        names.push(name);
    }

    names.sort();
    debug!(
        "found {} global stylesheet(s) in {}",
        names.len(),
        folder.display()
    );

    Ok(names.into_iter().map(GlobalCssFile::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "html { color: red; }").unwrap();
    }

    fn names(files: &[GlobalCssFile]) -> Vec<&str> {
        files.iter().map(|f| f.file_name.as_str()).collect()
    }

    #[test]
    fn lists_only_top_level_css_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "styles.css");
        touch(dir.path(), "document.css");
        touch(dir.path(), "theme.json");
        touch(dir.path(), "notes.css.txt");
        std::fs::create_dir(dir.path().join("components")).unwrap();
        touch(&dir.path().join("components"), "vaadin-button.css");

        let files = scan_theme_folder(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["document.css", "styles.css"]);
    }

    #[test]
    fn directory_named_like_css_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("legacy.css")).unwrap();
        touch(dir.path(), "main.css");

        let files = scan_theme_folder(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["main.css"]);
    }

    #[test]
    fn hidden_and_upper_case_extensions_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".draft.css");
        touch(dir.path(), "LOUD.CSS");
        touch(dir.path(), "quiet.css");

        let files = scan_theme_folder(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["quiet.css"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_judged_by_their_target() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        touch(dir.path(), "ok.css");
        touch(outside.path(), "shared.css");
        symlink(outside.path(), dir.path().join("dirlink.css")).unwrap();
        symlink(outside.path().join("shared.css"), dir.path().join("filelink.css")).unwrap();
        symlink(dir.path().join("gone.css"), dir.path().join("dangling.css")).unwrap();

        let files = scan_theme_folder(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["dangling.css", "filelink.css", "ok.css"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "ok.css");
        std::fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.css")), "p {}").unwrap();

        let files = scan_theme_folder(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["ok.css"]);
    }

    #[test]
    fn missing_folder_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = scan_theme_folder(&dir.path().join("no-such-theme")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn file_instead_of_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "plain.css");

        let err = scan_theme_folder(&dir.path().join("plain.css")).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }

    #[test]
    fn results_are_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.css", "a.css", "b.css"] {
            touch(dir.path(), name);
        }

        let files = scan_theme_folder(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.css", "b.css", "c.css"]);
    }

    #[test]
    fn identifiers_are_derived_from_names() {
        let file = GlobalCssFile::new("main-layout.css");
        assert_eq!(file.identifier, "main-LayoutCss");
        assert!(!file.is_document_css());
        assert!(GlobalCssFile::new("document.css").is_document_css());
        assert!(!GlobalCssFile::new("Document.css").is_document_css());
    }

    #[test]
    fn css_name_matching() {
        assert!(is_global_css_name("a.css"));
        assert!(is_global_css_name("my.styles.css"));
        assert!(!is_global_css_name(".css"));
        assert!(!is_global_css_name(".hidden.css"));
        assert!(!is_global_css_name("a.scss"));
        assert!(!is_global_css_name("a.CSS"));
    }
}
