//! Typed model of the generated `applyTheme` at runtime.
//!
//! The emitted module marks a target by setting a dynamic property on it.
//! Here that marker is an explicit [`ThemeApplication`] record owned by the
//! [`StyleTarget`] it belongs to, so applying a theme twice to the same
//! target injects its stylesheets once.

use crate::module::{InjectionTarget, ThemeModule};
use crate::scan::GlobalCssFile;
use std::path::Path;
use themegen_common::ThemeError;
use tracing::debug;

/// A constructed stylesheet in a target's adopted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// File name the CSS came from.
    pub source: String,
    pub css: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Document,
    ShadowRoot,
}

/// Per-target record of whether a theme's global CSS has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeApplication {
    pub flag: String,
    pub applied: bool,
}

/// A document or shadow root that stylesheets can be adopted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTarget {
    kind: TargetKind,
    adopted_style_sheets: Vec<StyleSheet>,
    applications: Vec<ThemeApplication>,
}

impl StyleTarget {
    pub fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            adopted_style_sheets: Vec::new(),
            applications: Vec::new(),
        }
    }

    pub fn document() -> Self {
        Self::new(TargetKind::Document)
    }

    pub fn shadow_root() -> Self {
        Self::new(TargetKind::ShadowRoot)
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn adopted_style_sheets(&self) -> &[StyleSheet] {
        &self.adopted_style_sheets
    }

    /// Append a new sheet built from `css` after the already adopted ones.
    pub fn inject_global_css(&mut self, source: &str, css: &str) {
        self.adopted_style_sheets.push(StyleSheet {
            source: source.to_string(),
            css: css.to_string(),
        });
    }

    pub fn is_applied(&self, flag: &str) -> bool {
        self.applications
            .iter()
            .any(|a| a.flag == flag && a.applied)
    }

    pub fn mark_applied(&mut self, flag: &str) {
        match self.applications.iter_mut().find(|a| a.flag == flag) {
            Some(record) => record.applied = true,
            None => self.applications.push(ThemeApplication {
                flag: flag.to_string(),
                applied: true,
            }),
        }
    }

    pub fn applications(&self) -> &[ThemeApplication] {
        &self.applications
    }
}

/// A theme module with the CSS text of every stylesheet loaded.
#[derive(Debug, Clone)]
pub struct ThemeBundle {
    module: ThemeModule,
    css: Vec<String>,
}

impl ThemeBundle {
    /// Read each stylesheet of `module` from `folder`.
    pub fn load(module: &ThemeModule, folder: &Path) -> Result<Self, ThemeError> {
        let css = module
            .files()
            .iter()
            .map(|file| {
                let path = folder.join(&file.file_name);
                std::fs::read_to_string(&path).map_err(|source| ThemeError::ReadCss { path, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            module: module.clone(),
            css,
        })
    }

    /// Build a bundle from in-memory CSS, paired with the module's files in order.
    ///
    /// `css` must hold exactly one entry per stylesheet of `module`.
    pub fn from_css(module: &ThemeModule, css: Vec<String>) -> Result<Self, ThemeError> {
        let files = module.files().len();
        if css.len() != files {
            return Err(ThemeError::BundleMismatch {
                theme: module.theme_name().to_string(),
                files,
                css: css.len(),
            });
        }

        Ok(Self {
            module: module.clone(),
            css,
        })
    }

    // Both constructors keep `css` the same length as the module's files.
    fn css_for(&self, file: &GlobalCssFile) -> &str {
        self.module
            .files()
            .iter()
            .position(|f| f == file)
            .and_then(|i| self.css.get(i))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Apply the theme to `target`, also adding `document.css` to `document`.
    ///
    /// Does nothing if `target` already carries the theme's record. Returns
    /// whether any stylesheet was injected.
    pub fn apply_theme(&self, target: &mut StyleTarget, document: &mut StyleTarget) -> bool {
        let flag = self.module.flag();
        if target.is_applied(flag) {
            debug!(
                "theme {} already applied to {:?} target",
                self.module.theme_name(),
                target.kind()
            );
            return false;
        }

        for call in self.module.injections() {
            let css = self.css_for(call.file);
            match call.into {
                InjectionTarget::Document => document.inject_global_css(&call.file.file_name, css),
                InjectionTarget::Target => target.inject_global_css(&call.file.file_name, css),
            }
        }

        target.mark_applied(flag);
        true
    }

    /// Apply the theme with the document itself as the target.
    ///
    /// `document.css` ends up adopted twice, as it does when the generated
    /// module is called with `document`.
    pub fn apply_theme_to_document(&self, document: &mut StyleTarget) -> bool {
        let flag = self.module.flag();
        if document.is_applied(flag) {
            return false;
        }

        for call in self.module.injections() {
            document.inject_global_css(&call.file.file_name, self.css_for(call.file));
        }

        document.mark_applied(flag);
        true
    }
}
