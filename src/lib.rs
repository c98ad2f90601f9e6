//! BlankMatch Core - High-performance Rust module for quiz answer overlays
//!
//! Provides sentence normalization, blank detection, similarity scoring,
//! answer-key parsing, and best-match selection over a question bank.
//!
//! The engine is pure data-in/data-out: page scraping, on-page rendering,
//! and question-bank storage belong to the host. Host access goes through
//! the optional `python` feature, which builds this crate as an extension
//! module.

mod answers;
mod bank;
mod blanks;
mod matcher;
mod normalize;
mod similarity;

// Re-export the engine surface for Rust consumers
pub use answers::{parse_answers, ParsedAnswer};
pub use bank::{parse_bank, ReferenceQuestion};
pub use blanks::{count_blanks, has_blanks};
pub use matcher::{find_best_match, MatchResult, MatchThresholds};
pub use normalize::{normalize, BLANK_TOKEN};
pub use similarity::{jaccard, similarity, word_overlap};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// BlankMatch Core Python Module
#[cfg(feature = "python")]
#[pymodule]
fn blankmatch_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Normalization and blank detection
    m.add_function(wrap_pyfunction!(normalize::py_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(blanks::py_has_blanks, m)?)?;
    m.add_function(wrap_pyfunction!(blanks::py_count_blanks, m)?)?;

    // Similarity scoring
    m.add_function(wrap_pyfunction!(similarity::py_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(similarity::py_word_overlap, m)?)?;

    // Answer parsing
    m.add_function(wrap_pyfunction!(answers::py_parse_answers, m)?)?;

    // Question bank
    m.add_function(wrap_pyfunction!(bank::py_parse_bank, m)?)?;

    // Match selection
    m.add_function(wrap_pyfunction!(matcher::py_find_best_match, m)?)?;

    // Register classes
    m.add_class::<bank::ReferenceQuestion>()?;
    m.add_class::<answers::ParsedAnswer>()?;
    m.add_class::<matcher::MatchResult>()?;

    Ok(())
}
