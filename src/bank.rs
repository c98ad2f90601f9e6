//! Question bank records and local-cache decoding

use serde::{Deserialize, Serialize};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// One entry from the question bank: a question template and its free-text,
/// possibly multi-part answer. Missing fields decode as empty strings and
/// simply fail to match; extra fields from the host's cache are ignored.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[cfg(feature = "python")]
#[pymethods]
impl ReferenceQuestion {
    #[new]
    fn new(question: String, answer: String) -> Self {
        Self { question, answer }
    }

    fn __repr__(&self) -> String {
        format!(
            "ReferenceQuestion(question='{}')",
            self.question.chars().take(40).collect::<String>()
        )
    }
}

/// Decode a question bank from the host's cached JSON array.
pub fn parse_bank(json: &str) -> Result<Vec<ReferenceQuestion>, String> {
    let bank: Vec<ReferenceQuestion> =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse question bank: {}", e))?;
    tracing::debug!("Loaded question bank with {} entries", bank.len());
    Ok(bank)
}

// ============= Python Binding =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "parse_bank")]
pub fn py_parse_bank(json: &str) -> PyResult<Vec<ReferenceQuestion>> {
    parse_bank(json).map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bank_entries() {
        let bank = parse_bank(
            r#"[{"question": "She ... went", "answer": "1.home"},
                {"question": "I ... go", "answer": "out"}]"#,
        )
        .unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0].question, "She ... went");
        assert_eq!(bank[1].answer, "out");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let bank = parse_bank(r#"[{"question": "only a question"}, {}]"#).unwrap();
        assert_eq!(bank[0].answer, "");
        assert_eq!(bank[1].question, "");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let bank =
            parse_bank(r#"[{"question": "q", "answer": "a", "id": 7, "category": "verbs"}]"#)
                .unwrap();
        assert_eq!(bank[0].question, "q");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_bank("not json").is_err());
        assert!(parse_bank(r#"{"question": "not an array"}"#).is_err());
    }
}
