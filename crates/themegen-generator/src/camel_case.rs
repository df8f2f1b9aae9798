//! Identifier derivation for stylesheet imports.
//!
//! A file name becomes the import binding by lower-casing the first word
//! character, upper-casing every later word start (any ASCII capital, or any
//! word character following a non-word character), then dropping whitespace
//! and dots. Word characters and boundaries are ASCII-only.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that start a new word: the leading word character, every ASCII
/// capital, and every word character right after a boundary.
static WORD_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:^\w|[A-Z]|\b\w)").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Convert a stylesheet file name into the identifier used to import it.
///
/// `my.styles.css` becomes `myStylesCss`. Hyphens only act as boundaries and
/// are kept (`my-theme.css` becomes `my-ThemeCss`), and runs of capitals are
/// not collapsed (`ABTest.css` becomes `aBTestCss`).
pub fn camel_case(filename: &str) -> String {
    let mut cased = String::with_capacity(filename.len());
    let mut last = 0;

    for m in WORD_START_RE.find_iter(filename) {
        cased.push_str(&filename[last..m.start()]);
        if m.start() == 0 {
            cased.push_str(&m.as_str().to_ascii_lowercase());
        } else {
            cased.push_str(&m.as_str().to_ascii_uppercase());
        }
        last = m.end();
    }
    cased.push_str(&filename[last..]);

    WHITESPACE_RE.replace_all(&cased, "").replace('.', "")
}
