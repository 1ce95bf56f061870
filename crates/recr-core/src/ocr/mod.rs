//! Input contract with the external OCR engine.
//!
//! This core never sees pixels. It consumes the recognition output of an
//! external OCR pass: a stream of positioned text tokens plus the
//! plain-text rendering of the same pass.

mod lines;

pub use lines::{LineMap, join_text};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecrError, Result};

/// One recognized word or fragment, with position and line metadata.
///
/// Tokens are produced entirely by the OCR collaborator; the extraction
/// core never creates or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedToken {
    /// Recognized text, trimmed upstream.
    pub text: String,

    /// Horizontal position within the line (left edge, pixels).
    pub x: u32,

    /// Index of the visual row this token belongs to.
    pub line_index: i64,

    /// Recognition confidence in [0, 100]; `None` when the engine reported
    /// no confidence. Out-of-range values (e.g. the `-1` sentinel some
    /// engines emit) are treated as absent, never as 0.
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl RecognizedToken {
    /// Confidence, filtered to the valid [0, 100] range.
    pub fn valid_confidence(&self) -> Option<f32> {
        self.confidence.filter(|c| (0.0..=100.0).contains(c))
    }
}

/// The complete output of one recognition pass: the token stream and the
/// plain-text rendering produced by the same run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionOutput {
    /// Recognized tokens with position and line metadata.
    pub tokens: Vec<RecognizedToken>,

    /// Plain-text rendering of the same recognition pass.
    pub raw_text: String,
}

impl RecognitionOutput {
    /// Deserialize a recognition output from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Err(RecrError::NoInputProvided);
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read a recognition output from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

/// Reduce per-token confidences to a single document-level score.
///
/// Arithmetic mean of all valid confidences, rounded to 2 decimal places;
/// 0 when no token carries a valid confidence.
pub fn aggregate_confidence(tokens: &[RecognizedToken]) -> f64 {
    let confs: Vec<f64> = tokens
        .iter()
        .filter_map(RecognizedToken::valid_confidence)
        .map(f64::from)
        .collect();

    if confs.is_empty() {
        return 0.0;
    }

    let mean = confs.iter().sum::<f64>() / confs.len() as f64;
    (mean * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tok(text: &str, conf: Option<f32>) -> RecognizedToken {
        RecognizedToken {
            text: text.to_string(),
            x: 0,
            line_index: 0,
            confidence: conf,
        }
    }

    #[test]
    fn test_aggregate_confidence_mean() {
        let tokens = vec![tok("a", Some(90.0)), tok("b", Some(80.0)), tok("c", Some(85.5))];
        assert_eq!(aggregate_confidence(&tokens), 85.17);
    }

    #[test]
    fn test_aggregate_confidence_empty_is_zero() {
        assert_eq!(aggregate_confidence(&[]), 0.0);
        let tokens = vec![tok("a", None), tok("b", None)];
        assert_eq!(aggregate_confidence(&tokens), 0.0);
    }

    #[test]
    fn test_aggregate_confidence_skips_sentinel() {
        let tokens = vec![tok("a", Some(-1.0)), tok("b", Some(50.0)), tok("c", Some(120.0))];
        assert_eq!(aggregate_confidence(&tokens), 50.0);
    }

    #[test]
    fn test_from_json_str_empty_input() {
        let err = RecognitionOutput::from_json_str("  \n").unwrap_err();
        assert!(matches!(err, RecrError::NoInputProvided));
    }

    #[test]
    fn test_from_json_str_roundtrip() {
        let output = RecognitionOutput {
            tokens: vec![tok("MILK", Some(92.0))],
            raw_text: "MILK".to_string(),
        };
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(RecognitionOutput::from_json_str(&json).unwrap(), output);
    }

    #[test]
    fn test_confidence_defaults_to_none() {
        let json = r#"{"text":"MILK","x":10,"line_index":2}"#;
        let token: RecognizedToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.valid_confidence(), None);
    }
}
