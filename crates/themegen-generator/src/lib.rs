//! Theme module generation.
//!
//! Scans a theme folder for global stylesheets and emits a JavaScript module
//! that adopts them into a Document or ShadowRoot:
//! - `injectGlobalCss(css, target)` helper built on constructible stylesheets
//! - one default import per `*.css` file, bound to a camelCased identifier
//! - `applyTheme(target)`, guarded by a per-theme flag so each target is
//!   styled at most once
//!
//! The generator only reads the folder listing; writing the module out is up
//! to the caller.

pub mod camel_case;
pub mod diagnostics;
pub mod module;
pub mod runtime;
pub mod scan;

pub use camel_case::camel_case;
pub use diagnostics::{check_identifiers, is_valid_identifier, IdentifierDiagnostic};
pub use module::{global_css_flag, Injection, InjectionTarget, ThemeModule, FLAG_PREFIX, FLAG_SUFFIX};
pub use runtime::{StyleSheet, StyleTarget, TargetKind, ThemeApplication, ThemeBundle};
pub use scan::{is_global_css_name, scan_theme_folder, GlobalCssFile, DOCUMENT_CSS};

use std::path::Path;
use themegen_common::ThemeError;
use tracing::{info, warn};

/// Plan the module for the theme in `theme_folder`.
///
/// Identifier problems are logged but do not stop generation.
pub fn plan_theme_module(theme_folder: &Path, theme_name: &str) -> Result<ThemeModule, ThemeError> {
    let files = scan_theme_folder(theme_folder)?;
    let module = ThemeModule::from_files(theme_name, files);

    for diagnostic in module.diagnostics() {
        warn!(theme = theme_name, "{diagnostic}");
    }

    Ok(module)
}

/// Generate the text of the `[theme_name].js` module for `theme_folder`.
pub fn generate_theme_file(theme_folder: &Path, theme_name: &str) -> Result<String, ThemeError> {
    let module = plan_theme_module(theme_folder, theme_name)?;
    info!(
        theme = theme_name,
        stylesheets = module.files().len(),
        "generated theme module"
    );
    Ok(module.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_folder_generates_empty_apply_body() {
        let dir = tempfile::tempdir().unwrap();
        let text = generate_theme_file(dir.path(), "dark").unwrap();

        assert!(text.contains("export const injectGlobalCss"));
        assert!(!text.contains("import "));
        assert!(text.contains(
            "if (!target['_vaadinds_dark_globalCss']) {\n    \n    target['_vaadinds_dark_globalCss'] = true;"
        ));
        assert_eq!(text.matches('{').count(), text.matches('}').count());
    }

    #[test]
    fn missing_folder_generates_like_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = generate_theme_file(&dir.path().join("nope"), "dark").unwrap();
        let empty = generate_theme_file(dir.path(), "dark").unwrap();
        assert_eq!(missing, empty);
    }

    #[test]
    fn document_and_foo_are_imported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("foo.css"), "a {}").unwrap();
        std::fs::write(dir.path().join("document.css"), "@font-face {}").unwrap();

        let text = generate_theme_file(dir.path(), "dark").unwrap();
        assert!(text.contains("import fooCss from './foo.css';"));
        assert!(text.contains("import documentCss from './document.css';"));
        assert!(text.contains("injectGlobalCss(documentCss.toString(), document);"));
        assert!(text.contains("injectGlobalCss(documentCss.toString(), target);"));
        assert!(text.contains("injectGlobalCss(fooCss.toString(), target);"));
        assert!(!text.contains("injectGlobalCss(fooCss.toString(), document);"));
    }

    #[test]
    fn generation_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["z.css", "m.css", "a.css", "document.css"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let first = generate_theme_file(dir.path(), "dark").unwrap();
        let second = generate_theme_file(dir.path(), "dark").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn subdirectory_css_is_not_imported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("components")).unwrap();
        std::fs::write(dir.path().join("components").join("button.css"), "").unwrap();

        let text = generate_theme_file(dir.path(), "dark").unwrap();
        assert!(!text.contains("button"));
    }

    #[test]
    fn generated_module_guards_like_runtime_model() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("styles.css"), "p {}").unwrap();

        let module = plan_theme_module(dir.path(), "dark").unwrap();
        let bundle = ThemeBundle::load(&module, dir.path()).unwrap();
        let mut document = StyleTarget::document();
        let mut root = StyleTarget::shadow_root();

        bundle.apply_theme(&mut root, &mut document);
        bundle.apply_theme(&mut root, &mut document);
        assert_eq!(root.adopted_style_sheets().len(), 1);
        assert!(module.render().contains(module.flag()));
    }
}
