//! Canonical text normalization for sentence comparison

use once_cell::sync::Lazy;
use regex::Regex;

use crate::blanks::BLANK_RE;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Canonical token every blank glyph collapses to.
pub const BLANK_TOKEN: &str = "...";

/// Interim single-character placeholder carried through the punctuation
/// strip. Must not appear in [`PUNCT_RE`].
const PLACEHOLDER: char = '…';

/// Leading ordinal or label prefix: "1.", "23)", "a:", "b)" and the like.
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+[.):]\s*").unwrap());

/// Punctuation dropped from normalized text: all ASCII punctuation plus
/// the common unicode quote and dash characters pages tend to carry.
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[[:punct:]“”‘’«»¿¡—–]"#).unwrap());

/// Canonicalize a raw sentence or reference-question string.
///
/// Blank glyphs of any recognized family collapse to the shared `...`
/// token, a single leading ordinal label is stripped, remaining
/// punctuation is removed, whitespace folds to single spaces, and the
/// result is trimmed and lower-cased. Idempotent: normalizing an already
/// normalized string returns it unchanged. Text without blanks passes
/// through the same steps, so blank-bearing and blank-free strings
/// compare uniformly.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lifted = BLANK_RE.replace_all(text, format!(" {PLACEHOLDER} ").as_str());
    let unlabeled = LABEL_RE.replace(&lifted, "");
    let stripped = PUNCT_RE.replace_all(&unlabeled, "");
    let expanded = stripped.replace(PLACEHOLDER, &format!(" {BLANK_TOKEN} "));

    expanded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ============= Python Binding =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "normalize", signature = (text=None))]
pub fn py_normalize(text: Option<&str>) -> String {
    normalize(text.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_glyph_families_collapse_to_one_token() {
        let expected = "complete i ... go";
        assert_eq!(normalize("Complete, I ... go"), expected);
        assert_eq!(normalize("Complete, I .... go"), expected);
        assert_eq!(normalize("Complete, I … go"), expected);
        assert_eq!(normalize("Complete, I ____ go"), expected);
        assert_eq!(normalize("Complete, I [] go"), expected);
    }

    #[test]
    fn test_leading_label_stripped_once() {
        assert_eq!(normalize("1. She went home"), "she went home");
        assert_eq!(normalize("a) She went home"), "she went home");
        assert_eq!(normalize("12: She went home"), "she went home");
        // Only the very first label goes; later ordinals are plain words.
        assert_eq!(normalize("1. 2. hello"), "2 hello");
    }

    #[test]
    fn test_label_prefix_strips_following_colon_phrase() {
        assert_eq!(normalize("Complete: I ... go"), "i ... go");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(normalize("Hello, \"world\"; (really)!"), "hello world really");
        assert_eq!(normalize("don't stop"), "dont stop");
    }

    #[test]
    fn test_whitespace_folded_and_lowercased() {
        assert_eq!(normalize("  She\t went \n HOME  "), "she went home");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_blank_free_prose_normalizes_like_ordinary_text() {
        assert_eq!(
            normalize("2) The mitochondria is the powerhouse."),
            "the mitochondria is the powerhouse"
        );
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "1. She ____ to the store yesterday.",
            "Complete: I ... go",
            "a) Empty [  ] brackets, and … more",
            "1. 2. hello",
            "plain prose, nothing special",
            "",
            "....",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
