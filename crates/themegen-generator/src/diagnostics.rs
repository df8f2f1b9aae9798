//! Checks on derived import identifiers.
//!
//! File names map to identifiers without any disambiguation, so two files can
//! end up with the same binding, or a binding the module cannot declare.
//! These checks report such cases; they never change the generated output.

use crate::scan::GlobalCssFile;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{XID_Start}_$][\p{XID_Continue}$]*$").unwrap());

/// Names declared by the generated module itself.
const MODULE_BINDINGS: &[&str] = &["injectGlobalCss", "applyTheme"];

/// A problem with the import binding derived for one or more stylesheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentifierDiagnostic {
    /// Several files derive the same identifier.
    Collision {
        identifier: String,
        files: Vec<String>,
    },
    /// The derived name cannot be used as an import binding.
    NotAnIdentifier { identifier: String, file: String },
    /// The derived name shadows a function the module declares.
    ShadowsModuleBinding { identifier: String, file: String },
    /// The file name cannot be placed inside a single-quoted import path.
    UnquotableFileName { file: String },
}

impl fmt::Display for IdentifierDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision { identifier, files } => write!(
                f,
                "files {} all import as '{identifier}'",
                files.join(", ")
            ),
            Self::NotAnIdentifier { identifier, file } => {
                write!(f, "{file} imports as '{identifier}', which is not an identifier")
            }
            Self::ShadowsModuleBinding { identifier, file } => write!(
                f,
                "{file} imports as '{identifier}', which the module already declares"
            ),
            Self::UnquotableFileName { file } => {
                write!(f, "{file:?} cannot be written inside an import path")
            }
        }
    }
}

/// Whether `name` is a valid ECMAScript binding name (reserved words aside).
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Check every derived identifier, in file order.
pub fn check_identifiers(files: &[GlobalCssFile]) -> Vec<IdentifierDiagnostic> {
    let mut diagnostics = Vec::new();

    for file in files {
        if file
            .file_name
            .chars()
            .any(|c| matches!(c, '\'' | '\\' | '\n' | '\r' | '\u{2028}' | '\u{2029}'))
        {
            diagnostics.push(IdentifierDiagnostic::UnquotableFileName {
                file: file.file_name.clone(),
            });
        }

        if !is_valid_identifier(&file.identifier) {
            diagnostics.push(IdentifierDiagnostic::NotAnIdentifier {
                identifier: file.identifier.clone(),
                file: file.file_name.clone(),
            });
        } else if MODULE_BINDINGS.contains(&file.identifier.as_str()) {
            diagnostics.push(IdentifierDiagnostic::ShadowsModuleBinding {
                identifier: file.identifier.clone(),
                file: file.file_name.clone(),
            });
        }
    }

    // Group by identifier, keeping first-seen order.
    let mut groups: Vec<(&str, Vec<String>)> = Vec::new();
    for file in files {
        match groups.iter_mut().find(|(id, _)| *id == file.identifier) {
            Some((_, names)) => names.push(file.file_name.clone()),
            None => groups.push((&file.identifier, vec![file.file_name.clone()])),
        }
    }
    for (identifier, names) in groups {
        if names.len() > 1 {
            diagnostics.push(IdentifierDiagnostic::Collision {
                identifier: identifier.to_string(),
                files: names,
            });
        }
    }

    diagnostics
}
