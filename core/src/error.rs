//! Error types for diacritice-core.
//!
//! Loading the dictionary or a configuration file are the only fallible
//! steps in the crate. Once an `Engine` exists, every word-level operation
//! produces some output token.

use thiserror::Error;

/// Failure to turn a dictionary resource into a `Dictionary`.
///
/// A missing file is not represented here: `Dictionary::load` treats it as
/// an empty dictionary.
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    /// The resource exists but could not be opened or read.
    #[error("failed to read dictionary {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not a JSON object of string to string.
    #[error("malformed dictionary {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The resource is not a valid bincode dictionary artifact.
    #[error("malformed dictionary artifact {origin}: {source}")]
    Bincode {
        origin: String,
        #[source]
        source: bincode::Error,
    },
}

impl DictionaryLoadError {
    /// The path (or `<memory>`) the failing resource came from.
    pub fn origin(&self) -> &str {
        match self {
            Self::Io { origin, .. } | Self::Json { origin, .. } | Self::Bincode { origin, .. } => {
                origin
            }
        }
    }
}

/// Failure to read or write a TOML `Config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
