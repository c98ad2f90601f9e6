//! Similarity scoring between normalized sentences
//!
//! All functions expect already-normalized input (see [`crate::normalize`])
//! and return scores in `[0.0, 1.0]`. Scoring is pure and symmetric.

use std::collections::HashSet;

use crate::normalize::BLANK_TOKEN;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Score two normalized strings: exact equality first, Jaccard otherwise.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    jaccard(a, b)
}

/// Jaccard word-set similarity.
///
/// Tokens are whitespace-delimited; the blank token is discarded from both
/// sides so a sentence matches its own blanked-out form. Two empty token
/// sets score 1.0, exactly one empty set scores 0.0.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<&str> = word_tokens(a).collect();
    let set_b: HashSet<&str> = word_tokens(b).collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

/// Order-agnostic one-to-one word overlap.
///
/// Tokens exclude the blank token and single-character words. Each token of
/// `a` is greedily paired with the first unused identical token of `b`; the
/// score is paired count over the larger token count. Rewards sentences
/// sharing most words even when one side carries extra unique tokens that
/// depress Jaccard. Either side empty scores 0.0.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let tokens_a: Vec<&str> = word_tokens(a).filter(|t| t.chars().count() > 1).collect();
    let tokens_b: Vec<&str> = word_tokens(b).filter(|t| t.chars().count() > 1).collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let mut used = vec![false; tokens_b.len()];
    let mut paired = 0usize;
    for token in &tokens_a {
        for (i, other) in tokens_b.iter().enumerate() {
            if !used[i] && other == token {
                used[i] = true;
                paired += 1;
                break;
            }
        }
    }

    paired as f64 / tokens_a.len().max(tokens_b.len()) as f64
}

fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|t| *t != BLANK_TOKEN)
}

// ============= Python Bindings =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "similarity")]
pub fn py_similarity(a: &str, b: &str) -> f64 {
    similarity(a, b)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "word_overlap")]
pub fn py_word_overlap(a: &str, b: &str) -> f64 {
    word_overlap(a, b)
}
