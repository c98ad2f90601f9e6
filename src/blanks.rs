//! Blank placeholder detection in scraped quiz sentences

use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Every blank-glyph family a quiz page may render: runs of two or more
/// periods, unicode ellipsis / two-dot-leader runs, underscore runs, and
/// empty (or whitespace-only) bracket pairs.
pub(crate) static BLANK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.{2,}|[…‥]+|_{2,}|\[\s*\]|\(\s*\)|\{\s*\}").unwrap()
});

/// Shared marker used while counting, so adjacent runs from different
/// families keep a stable count no matter which alternation fires first.
const COUNT_MARKER: &str = "\u{FFFC}";

/// Check whether the text contains at least one blank placeholder.
pub fn has_blanks(text: &str) -> bool {
    BLANK_RE.is_match(text)
}

/// Count blank placeholders in the raw (non-normalized) text.
///
/// Every occurrence of any glyph family is first collapsed to one shared
/// marker, then markers are counted, so overlapping families are never
/// double-counted.
pub fn count_blanks(text: &str) -> usize {
    BLANK_RE
        .replace_all(text, COUNT_MARKER)
        .matches(COUNT_MARKER)
        .count()
}

// ============= Python Bindings =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "has_blanks")]
pub fn py_has_blanks(text: &str) -> bool {
    has_blanks(text)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "count_blanks")]
pub fn py_count_blanks(text: &str) -> usize {
    count_blanks(text)
}
