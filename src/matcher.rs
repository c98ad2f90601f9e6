//! Best-candidate selection over a question bank

use serde::{Deserialize, Serialize};

use crate::answers::{parse_answers, ParsedAnswer};
use crate::bank::ReferenceQuestion;
use crate::normalize::normalize;
use crate::similarity::{jaccard, word_overlap};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Tunable acceptance knobs.
///
/// The defaults are a tuned set: the Jaccard admission floor and the final
/// acceptance floor are deliberately the same value, and the word-overlap
/// bar is calibrated against the greedy pairing in
/// [`crate::similarity::word_overlap`]. Adjust them together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// A Jaccard score must exceed this to become the running best.
    pub jaccard_floor: f64,
    /// A word-overlap score must exceed this to become the running best.
    pub overlap_floor: f64,
    /// The running best must exceed this to be returned at all.
    pub accept_floor: f64,
    /// Sentences shorter than this many characters never match.
    pub min_sentence_len: usize,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            jaccard_floor: 0.7,
            overlap_floor: 0.85,
            accept_floor: 0.7,
            min_sentence_len: 5,
        }
    }
}

/// An accepted match: the winning bank entry and its similarity score.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub question: ReferenceQuestion,
    pub score: f64,
}

impl MatchResult {
    /// Decode the winning question's answer field into per-blank answers.
    pub fn answers(&self) -> Vec<ParsedAnswer> {
        parse_answers(&self.question.answer)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl MatchResult {
    #[pyo3(name = "answers")]
    fn py_answers(&self) -> Vec<ParsedAnswer> {
        self.answers()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchResult(score={:.2}, question='{}')",
            self.score,
            self.question.question.chars().take(40).collect::<String>()
        )
    }
}

/// Running best over the candidate scan. Admission rules differ per
/// strategy, but once admitted a score competes on raw magnitude.
#[derive(Debug, Clone, Copy, Default)]
struct BestSoFar {
    index: Option<usize>,
    score: f64,
}

impl BestSoFar {
    fn offer(&mut self, index: usize, score: f64, floor: f64) {
        if score > floor && score > self.score {
            self.index = Some(index);
            self.score = score;
        }
    }
}

/// Find the bank entry best matching a scraped sentence.
///
/// Returns `None` for an empty bank or a sentence under the minimum length
/// (too little signal to match reliably), and otherwise scans every
/// candidate once: an exact normalized match is accepted immediately with
/// score 1.0, else Jaccard and word-overlap scores compete for the running
/// best under their respective floors. The best survivor is returned only
/// if its score exceeds the acceptance floor. Deterministic and total:
/// malformed candidate fields behave as empty strings and never match.
pub fn find_best_match(
    sentence: &str,
    bank: &[ReferenceQuestion],
    thresholds: &MatchThresholds,
) -> Option<MatchResult> {
    if bank.is_empty() || sentence.chars().count() < thresholds.min_sentence_len {
        return None;
    }

    let target = normalize(sentence);
    let mut best = BestSoFar::default();

    for (i, candidate) in bank.iter().enumerate() {
        let cand = normalize(&candidate.question);
        if target == cand {
            tracing::debug!("Exact match on candidate {}", i);
            return Some(MatchResult {
                question: candidate.clone(),
                score: 1.0,
            });
        }
        best.offer(i, jaccard(&target, &cand), thresholds.jaccard_floor);
        best.offer(i, word_overlap(&target, &cand), thresholds.overlap_floor);
    }

    match best.index {
        Some(i) if best.score > thresholds.accept_floor => {
            tracing::debug!("Accepted candidate {} with score {:.3}", i, best.score);
            Some(MatchResult {
                question: bank[i].clone(),
                score: best.score,
            })
        }
        _ => {
            tracing::debug!("No candidate above threshold (best {:.3})", best.score);
            None
        }
    }
}

// ============= Python Binding =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(
    name = "find_best_match",
    signature = (sentence, bank, jaccard_floor=None, overlap_floor=None, accept_floor=None, min_sentence_len=None)
)]
pub fn py_find_best_match(
    sentence: &str,
    bank: Vec<ReferenceQuestion>,
    jaccard_floor: Option<f64>,
    overlap_floor: Option<f64>,
    accept_floor: Option<f64>,
    min_sentence_len: Option<usize>,
) -> Option<MatchResult> {
    let defaults = MatchThresholds::default();
    let thresholds = MatchThresholds {
        jaccard_floor: jaccard_floor.unwrap_or(defaults.jaccard_floor),
        overlap_floor: overlap_floor.unwrap_or(defaults.overlap_floor),
        accept_floor: accept_floor.unwrap_or(defaults.accept_floor),
        min_sentence_len: min_sentence_len.unwrap_or(defaults.min_sentence_len),
    };
    find_best_match(sentence, &bank, &thresholds)
}
