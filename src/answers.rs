//! Answer-key decoding for multi-blank questions
//!
//! A reference question stores its answers as one free-text string, usually
//! "1.went, 2.walked" but often just "went, walked". Decoding yields one
//! entry per blank, ordered by index; pairing the Nth entry with the Nth
//! blank is the caller's convention.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Index marker inside an answer key: digits, a separator, optional space.
static INDEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)[.):\-]\s*").unwrap());

/// Same marker anchored to the start of a segment.
static LEADING_INDEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[.):\-]\s*").unwrap());

/// One decoded (index, answer) unit from a question's answer field.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAnswer {
    pub index: u32,
    pub answer: String,
}

#[cfg(feature = "python")]
#[pymethods]
impl ParsedAnswer {
    #[new]
    fn new(index: u32, answer: String) -> Self {
        Self { index, answer }
    }

    fn __repr__(&self) -> String {
        format!("ParsedAnswer(index={}, answer='{}')", self.index, self.answer)
    }
}

/// Decode a free-text answer string into ordered per-blank answers.
///
/// Indexed segments ("1.cat, 2.dog") are scanned first; when no index
/// marker exists anywhere, the string is split on commas, semicolons and
/// newlines and the segments take sequential indices from 1. The result is
/// stable-sorted ascending by index. Empty input yields an empty vector.
pub fn parse_answers(answer_text: &str) -> Vec<ParsedAnswer> {
    let text = answer_text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let markers: Vec<(usize, usize, u32)> = INDEX_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let index = caps[1].parse().ok()?;
            Some((whole.start(), whole.end(), index))
        })
        .collect();

    let mut parsed = if markers.is_empty() {
        split_segments(text)
    } else {
        markers
            .iter()
            .enumerate()
            .filter_map(|(i, &(_, end, index))| {
                let until = markers.get(i + 1).map_or(text.len(), |next| next.0);
                let answer = trim_segment(&text[end..until]);
                (!answer.is_empty()).then(|| ParsedAnswer {
                    index,
                    answer: answer.to_string(),
                })
            })
            .collect()
    };

    parsed.sort_by_key(|p| p.index);
    parsed
}

/// Fallback for keys without index markers: plain separator-delimited
/// answers, indexed by position.
fn split_segments(text: &str) -> Vec<ParsedAnswer> {
    let mut next_index = 1u32;
    let mut parsed = Vec::new();
    for segment in text.split([',', ';', '\n']) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if let Some(caps) = LEADING_INDEX_RE.captures(segment) {
            if let Ok(index) = caps[1].parse() {
                let answer = trim_segment(&segment[caps.get(0).unwrap().end()..]);
                if !answer.is_empty() {
                    parsed.push(ParsedAnswer {
                        index,
                        answer: answer.to_string(),
                    });
                }
                continue;
            }
        }
        parsed.push(ParsedAnswer {
            index: next_index,
            answer: segment.to_string(),
        });
        next_index += 1;
    }
    parsed
}

fn trim_segment(segment: &str) -> &str {
    segment.trim().trim_end_matches([',', ';']).trim()
}

// ============= Python Binding =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "parse_answers", signature = (answer_text=None))]
pub fn py_parse_answers(answer_text: Option<&str>) -> Vec<ParsedAnswer> {
    parse_answers(answer_text.unwrap_or_default())
}
