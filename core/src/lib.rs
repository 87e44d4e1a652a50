//! diacritice-core
//!
//! Restores Romanian diacritics (ă, â, î, ș, ț) in text typed without them.
//!
//! Words are looked up in a static dictionary of plain → diacritic forms.
//! Misses fall back to a similarity search over the dictionary, guarded by a
//! validator that rejects implausible rewrites. Capitalisation and a single
//! trailing punctuation mark are carried over from the input token.
//!
//! Public API:
//! - `Dictionary` - Read-only plain → diacritic word mapping
//! - `Engine` - `correct` / `explain` over a shared dictionary
//! - `CorrectionReport`, `WordCorrection`, `MatchKind` - `explain` output
//! - `Config` - Dictionary location and similarity threshold
//! - `DictionaryLoadError` - The only fatal engine error, raised at load time
//! - `ConfigError` - Unreadable or malformed TOML configuration
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod casing;
pub use casing::restore_casing;

pub mod dictionary;
pub use dictionary::Dictionary;

pub mod engine;
pub use engine::Engine;

pub mod error;
pub use error::{ConfigError, DictionaryLoadError};

pub mod fuzzy;
pub use fuzzy::{find_best_match, validate_correction, FuzzyMatch, DEFAULT_THRESHOLD};

pub mod report;
pub use report::{CorrectionReport, MatchKind, WordCorrection};

pub mod similarity;
pub use similarity::{similarity, SequenceMatcher};

pub mod tokenizer;

/// Engine configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Dictionary resource (JSON object or `.bin`/`.bincode` artifact).
    /// `None` means an empty dictionary.
    pub dictionary_path: Option<PathBuf>,

    /// Minimum adjusted similarity for a fuzzy match (default 0.8).
    pub similarity_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            similarity_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            origin: origin.clone(),
            source,
        })?;
        Self::parse(&content, origin)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<memory>".to_string())
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn parse(content: &str, origin: String) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { origin, source })
    }
}

/// Utility helpers.
pub mod utils {
    /// Compose to Unicode NFC, so "ț" typed as t + U+0326 is one character.
    pub fn nfc(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>()
    }
}
