//! Theme module planning and rendering.
//!
//! A [`ThemeModule`] holds everything needed to emit the theme's JavaScript
//! module: the guard flag and the ordered stylesheets. Rendering is pure and
//! deterministic for a given plan.

use crate::diagnostics::{check_identifiers, IdentifierDiagnostic};
use crate::scan::GlobalCssFile;

// =============================================================================
// FIXED MODULE TEXT
// =============================================================================

/// Prefix of the per-theme guard flag.
pub const FLAG_PREFIX: &str = "_vaadinds_";

/// Suffix of the per-theme guard flag.
pub const FLAG_SUFFIX: &str = "_globalCss";

const INJECT_GLOBAL_CSS_METHOD: &str = "
// target: Document | ShadowRoot
export const injectGlobalCss = (css, target) => {
  const sheet = new CSSStyleSheet();
  sheet.replaceSync(css);
  target.adoptedStyleSheets = [...target.adoptedStyleSheets, sheet];
};
";

/// Guard flag set on a target once the theme's global CSS is applied.
pub fn global_css_flag(theme_name: &str) -> String {
    format!("{FLAG_PREFIX}{theme_name}{FLAG_SUFFIX}")
}

// =============================================================================
// PLAN
// =============================================================================

/// Where an injection call puts a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionTarget {
    /// The global `document`.
    Document,
    /// The `target` passed to `applyTheme`.
    Target,
}

impl InjectionTarget {
    fn js_name(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Target => "target",
        }
    }
}

/// One `injectGlobalCss(...)` call inside `applyTheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Injection<'a> {
    pub file: &'a GlobalCssFile,
    pub into: InjectionTarget,
}

/// The generated module for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeModule {
    theme_name: String,
    flag: String,
    files: Vec<GlobalCssFile>,
}

impl ThemeModule {
    /// Plan a module for `theme_name` importing `files` in the given order.
    pub fn from_files(theme_name: &str, files: Vec<GlobalCssFile>) -> Self {
        Self {
            theme_name: theme_name.to_string(),
            flag: global_css_flag(theme_name),
            files,
        }
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// The guard flag checked and set by `applyTheme`.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn files(&self) -> &[GlobalCssFile] {
        &self.files
    }

    /// Injection calls in execution order.
    ///
    /// `document.css` is injected into the document right before it is
    /// injected into the target.
    pub fn injections(&self) -> Vec<Injection<'_>> {
        let mut calls = Vec::with_capacity(self.files.len() + 1);
        for file in &self.files {
            if file.is_document_css() {
                calls.push(Injection {
                    file,
                    into: InjectionTarget::Document,
                });
            }
            calls.push(Injection {
                file,
                into: InjectionTarget::Target,
            });
        }
        calls
    }

    pub fn diagnostics(&self) -> Vec<IdentifierDiagnostic> {
        check_identifiers(&self.files)
    }

    /// Render the module text: helper, imports, then `applyTheme`.
    pub fn render(&self) -> String {
        let mut module = String::from(INJECT_GLOBAL_CSS_METHOD);

        for file in &self.files {
            module.push_str(&format!(
                "import {} from './{}';\n",
                file.identifier, file.file_name
            ));
        }

        let mut global_css_code = String::new();
        for call in self.injections() {
            global_css_code.push_str(&format!(
                "injectGlobalCss({}.toString(), {});\n",
                call.file.identifier,
                call.into.js_name()
            ));
        }

        let flag = &self.flag;
        module.push_str(&format!(
            "export const applyTheme = (target) => {{
  if (!target['{flag}']) {{
    {global_css_code}
    target['{flag}'] = true;
  }}
}}
"
        ));

        module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(theme: &str, names: &[&str]) -> ThemeModule {
        ThemeModule::from_files(theme, names.iter().map(|n| GlobalCssFile::new(*n)).collect())
    }

    #[test]
    fn flag_for_dark_theme() {
        assert_eq!(global_css_flag("dark"), "_vaadinds_dark_globalCss");
        assert_eq!(module("dark", &[]).flag(), "_vaadinds_dark_globalCss");
    }

    #[test]
    fn flag_embeds_name_verbatim() {
        assert_eq!(global_css_flag(""), "_vaadinds__globalCss");
        assert_eq!(global_css_flag("my theme"), "_vaadinds_my theme_globalCss");
    }

    #[test]
    fn empty_module_layout() {
        let expected = "
// target: Document | ShadowRoot
export const injectGlobalCss = (css, target) => {
  const sheet = new CSSStyleSheet();
  sheet.replaceSync(css);
  target.adoptedStyleSheets = [...target.adoptedStyleSheets, sheet];
};
export const applyTheme = (target) => {
  if (!target['_vaadinds_empty_globalCss']) {
    \n    target['_vaadinds_empty_globalCss'] = true;
  }
}
";
        assert_eq!(module("empty", &[]).render(), expected);
    }

    #[test]
    fn document_css_is_also_injected_into_document() {
        let expected = "
// target: Document | ShadowRoot
export const injectGlobalCss = (css, target) => {
  const sheet = new CSSStyleSheet();
  sheet.replaceSync(css);
  target.adoptedStyleSheets = [...target.adoptedStyleSheets, sheet];
};
import documentCss from './document.css';
import fooCss from './foo.css';
export const applyTheme = (target) => {
  if (!target['_vaadinds_dark_globalCss']) {
    injectGlobalCss(documentCss.toString(), document);
injectGlobalCss(documentCss.toString(), target);
injectGlobalCss(fooCss.toString(), target);

    target['_vaadinds_dark_globalCss'] = true;
  }
}
";
        let text = module("dark", &["document.css", "foo.css"]).render();
        assert_eq!(text, expected);
        assert_eq!(text.matches(", document);").count(), 1);
        assert!(!text.contains("fooCss.toString(), document"));
    }

    #[test]
    fn injections_follow_file_order() {
        let m = module("t", &["a.css", "document.css", "z.css"]);
        let calls: Vec<_> = m
            .injections()
            .iter()
            .map(|c| (c.file.file_name.as_str(), c.into))
            .collect();
        assert_eq!(
            calls,
            vec![
                ("a.css", InjectionTarget::Target),
                ("document.css", InjectionTarget::Document),
                ("document.css", InjectionTarget::Target),
                ("z.css", InjectionTarget::Target),
            ]
        );
    }

    #[test]
    fn render_is_deterministic() {
        let m = module("dark", &["b.css", "a.css"]);
        assert_eq!(m.render(), m.clone().render());
    }

    #[test]
    fn exports_apply_theme_and_helper() {
        let text = module("x", &["styles.css"]).render();
        assert!(text.contains("export const applyTheme = (target) => {"));
        assert!(text.contains("export const injectGlobalCss = (css, target) => {"));
        assert!(text.contains("import stylesCss from './styles.css';\n"));
    }
}
