//! Per-word correction records and the aggregate report returned by
//! `Engine::explain`.

use serde::{Deserialize, Serialize};

/// How a word's corrected form was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The lowercased word is a dictionary key.
    Exact,
    /// A similar dictionary key passed scoring and validation.
    Fuzzy,
    /// No match; the token is returned unchanged.
    None,
}

/// Outcome for a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCorrection {
    /// Token as it appeared in the input, punctuation included.
    pub original: String,
    /// Token as it appears in the output.
    pub corrected: String,
    #[serde(rename = "type")]
    pub kind: MatchKind,
    /// 1.0 for exact and unmatched words, the word-to-replacement similarity
    /// for fuzzy ones.
    pub confidence: f64,
    /// Up to two tokens on each side of this one, itself included.
    pub context: Vec<String>,
}

impl WordCorrection {
    /// True when the output token differs from the input token.
    pub fn is_changed(&self) -> bool {
        self.original != self.corrected
    }
}

/// Full account of one `explain` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub original_text: String,
    /// Corrected tokens joined by single spaces; equals `Engine::correct`.
    pub corrected_text: String,
    pub corrections: Vec<WordCorrection>,
    /// Number of tokens with an exact or fuzzy match, changed or not.
    pub total_corrected: usize,
    pub total_words: usize,
}

impl CorrectionReport {
    /// `(original, corrected)` for every token that changed, in order.
    pub fn changed_words(&self) -> Vec<(&str, &str)> {
        self.corrections
            .iter()
            .filter(|c| c.is_changed())
            .map(|c| (c.original.as_str(), c.corrected.as_str()))
            .collect()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(original: &str, corrected: &str, kind: MatchKind) -> WordCorrection {
        WordCorrection {
            original: original.to_string(),
            corrected: corrected.to_string(),
            kind,
            confidence: 1.0,
            context: vec![original.to_string()],
        }
    }

    #[test]
    fn changed_words_skips_identical() {
        let report = CorrectionReport {
            original_text: "tara este".into(),
            corrected_text: "țară este".into(),
            corrections: vec![
                word("tara", "țară", MatchKind::Exact),
                word("este", "este", MatchKind::Exact),
            ],
            total_corrected: 1,
            total_words: 2,
        };
        assert_eq!(report.changed_words(), vec![("tara", "țară")]);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&word("x", "x", MatchKind::None)).unwrap();
        assert!(json.contains(r#""type":"none""#));
        let back: WordCorrection = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, MatchKind::None);
    }
}
