// core/src/engine.rs
//
// Correction engine: tokenizes text and restores diacritics word by word
// against a shared, read-only dictionary.

use std::sync::Arc;
use tracing::debug;

use crate::casing::restore_casing;
use crate::error::DictionaryLoadError;
use crate::fuzzy::find_best_match;
use crate::report::{CorrectionReport, MatchKind, WordCorrection};
use crate::similarity::similarity;
use crate::tokenizer;
use crate::{Config, Dictionary};

/// Dictionary value chosen for one word core.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Resolution<'d> {
    Exact(&'d str),
    Fuzzy(&'d str),
    Unmatched,
}

/// Diacritics restoration engine.
///
/// The engine holds no mutable state: `correct` and `explain` only read the
/// dictionary, so one engine (or many sharing the same `Arc<Dictionary>`) can
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Engine {
    dictionary: Arc<Dictionary>,
    config: Config,
}

impl Engine {
    /// Create an engine over an already loaded dictionary.
    pub fn new(dictionary: Arc<Dictionary>, config: Config) -> Self {
        Self { dictionary, config }
    }

    /// Create an engine with the default configuration.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self::new(Arc::new(dictionary), Config::default())
    }

    /// Load the dictionary named by `config.dictionary_path` and build an engine.
    ///
    /// Without a path, or with a path that does not exist, the engine starts
    /// with an empty dictionary and passes all text through.
    pub fn from_config(config: Config) -> Result<Self, DictionaryLoadError> {
        let dictionary = match &config.dictionary_path {
            Some(path) => Dictionary::load(path)?,
            None => Dictionary::new(),
        };
        Ok(Self::new(Arc::new(dictionary), config))
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Restore diacritics using the configured similarity threshold.
    pub fn correct(&self, text: &str) -> String {
        self.correct_with_threshold(text, self.config.similarity_threshold)
    }

    /// Restore diacritics with an explicit similarity threshold.
    ///
    /// Pipeline per token:
    /// 1. Detach trailing punctuation
    /// 2. Exact lookup of the lowercased core, else fuzzy search
    /// 3. Carry the token's casing over to the dictionary form
    /// 4. Reattach the punctuation
    ///
    /// Unmatched tokens are kept verbatim. Tokens are rejoined with single spaces.
    pub fn correct_with_threshold(&self, text: &str, threshold: f64) -> String {
        let tokens = tokenizer::split(text);
        let corrected: Vec<String> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let context = tokenizer::context_window(&tokens, i);
                let (core, punct) = tokenizer::strip_trailing_punctuation(token);
                let resolution = self.resolve(core, threshold, context);
                Self::render(token, core, punct, resolution)
            })
            .collect();
        tokenizer::join(&corrected)
    }

    /// Per-word report using the configured similarity threshold.
    pub fn explain(&self, text: &str) -> CorrectionReport {
        self.explain_with_threshold(text, self.config.similarity_threshold)
    }

    /// Per-word report with an explicit similarity threshold.
    ///
    /// `corrected_text` is always identical to what `correct_with_threshold`
    /// returns for the same arguments.
    pub fn explain_with_threshold(&self, text: &str, threshold: f64) -> CorrectionReport {
        let tokens = tokenizer::split(text);
        let mut corrections = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let context = tokenizer::context_window(&tokens, i);
            let (core, punct) = tokenizer::strip_trailing_punctuation(token);
            let resolution = self.resolve(core, threshold, context);

            let (kind, confidence) = match resolution {
                Resolution::Exact(_) => (MatchKind::Exact, 1.0),
                Resolution::Fuzzy(value) => (MatchKind::Fuzzy, similarity(core, value)),
                Resolution::Unmatched => (MatchKind::None, 1.0),
            };

            corrections.push(WordCorrection {
                original: token.to_string(),
                corrected: Self::render(token, core, punct, resolution),
                kind,
                confidence,
                context: context.iter().map(|t| t.to_string()).collect(),
            });
        }

        let corrected_text = tokenizer::join(
            &corrections
                .iter()
                .map(|c| c.corrected.as_str())
                .collect::<Vec<_>>(),
        );
        let total_corrected = corrections
            .iter()
            .filter(|c| c.kind != MatchKind::None)
            .count();

        CorrectionReport {
            original_text: text.to_string(),
            corrected_text,
            total_corrected,
            total_words: corrections.len(),
            corrections,
        }
    }

    /// Exact lookup first, fuzzy search only on a miss.
    fn resolve<'d>(&'d self, core: &str, threshold: f64, context: &[&str]) -> Resolution<'d> {
        if let Some(value) = self.dictionary.lookup(&core.to_lowercase()) {
            return Resolution::Exact(value);
        }
        match find_best_match(&self.dictionary, core, threshold, context) {
            Some(m) => {
                debug!(word = core, replacement = m.value, score = m.score, "fuzzy match");
                Resolution::Fuzzy(m.value)
            }
            None => Resolution::Unmatched,
        }
    }

    fn render(token: &str, core: &str, punct: &str, resolution: Resolution<'_>) -> String {
        match resolution {
            Resolution::Exact(value) | Resolution::Fuzzy(value) => {
                let mut out = restore_casing(core, value);
                out.push_str(punct);
                out
            }
            Resolution::Unmatched => token.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::with_dictionary(Dictionary::from_pairs([
            ("tara", "țară"),
            ("frumoasa", "frumoasă"),
            ("si", "și"),
            ("romania", "românia"),
        ]))
    }

    #[test]
    fn resolve_prefers_exact() {
        let e = engine();
        assert_eq!(e.resolve("Tara", 0.8, &[]), Resolution::Exact("țară"));
        assert_eq!(e.resolve("frumosa", 0.8, &[]), Resolution::Fuzzy("frumoasă"));
        assert_eq!(e.resolve("xyzzy", 0.8, &[]), Resolution::Unmatched);
    }

    #[test]
    fn render_keeps_unmatched_verbatim() {
        assert_eq!(Engine::render("ABC!", "ABC", "!", Resolution::Unmatched), "ABC!");
        assert_eq!(Engine::render("Tara!", "Tara", "!", Resolution::Exact("țară")), "Țară!");
    }

    #[test]
    fn threshold_comes_from_config() {
        let mut cfg = Config::default();
        cfg.similarity_threshold = 1.5;
        let e = Engine::new(engine().dictionary().clone(), cfg);
        // fuzzy is out of reach, exact still applies
        assert_eq!(e.correct("frumosa tara"), "frumosa țară");
        assert_eq!(e.correct_with_threshold("frumosa", 0.8), "frumoasă");
    }

    #[test]
    fn fuzzy_confidence_is_word_to_value_similarity() {
        let report = engine().explain("frumosa");
        let c = &report.corrections[0];
        assert_eq!(c.kind, MatchKind::Fuzzy);
        assert!((c.confidence - 0.8).abs() < 1e-12);
    }
}
