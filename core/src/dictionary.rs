//! Dictionary store for diacritice-core
//!
//! Maps a lowercase word form typed without diacritics (e.g. "tara") to its
//! canonical diacritic-bearing form ("țară"). The store is built once and is
//! read-only afterwards, so an `Arc<Dictionary>` can be shared between
//! threads without locking.
//!
//! Public API:
//! - `Dictionary` — exact lookup, ordered enumeration, loaders and savers
//!
//! Notes:
//! - Enumeration order is first-insertion order. Re-inserting an existing key
//!   replaces the value but keeps the key's position, so fuzzy tie-breaks are
//!   reproducible for a fixed resource.
//! - Two resource formats are accepted: a UTF-8 JSON object (read in document
//!   order) and a bincode artifact written by `save_bincode`.
//! - Keys and values are NFC-normalised on insert.

use ahash::AHashMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read};
use std::path::Path;
use tracing::{info, warn};

use crate::error::DictionaryLoadError;
use crate::utils;

const MEMORY_ORIGIN: &str = "<memory>";

/// A single key/value pair plus the key pre-split into characters for the
/// similarity scan.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) key_chars: Box<[char]>,
}

/// Immutable-after-load mapping from plain word forms to diacritic forms.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    index: AHashMap<String, usize>,
}

impl Dictionary {
    /// Create an empty dictionary. Every word passes through unchanged.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Build a dictionary from ordered pairs; later duplicates overwrite.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dict = Self::new();
        for (k, v) in pairs {
            dict.insert(k, v);
        }
        dict
    }

    /// Insert a mapping. An existing key keeps its position and gets the new value.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = utils::nfc(&key.into());
        let value = utils::nfc(&value.into());
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].value = value;
            return;
        }
        let key_chars = key.chars().collect::<Vec<_>>().into_boxed_slice();
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Entry {
            key,
            value,
            key_chars,
        });
    }

    /// Exact lookup of an already lowercased word.
    pub fn lookup(&self, word_lowercased: &str) -> Option<&str> {
        self.index
            .get(word_lowercased)
            .map(|&pos| self.entries[pos].value.as_str())
    }

    /// All `(key, value)` pairs in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub(crate) fn raw_entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Return the number of keys in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a dictionary resource from disk.
    ///
    /// Files ending in `.bin` or `.bincode` are read as bincode artifacts,
    /// anything else as a JSON object. A missing file yields an empty
    /// dictionary (the engine then passes every word through); any other
    /// failure is a `DictionaryLoadError`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryLoadError> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %origin, "dictionary resource not found, continuing with an empty dictionary");
                return Ok(Self::new());
            }
            Err(source) => return Err(DictionaryLoadError::Io { origin, source }),
        };
        let reader = BufReader::new(file);

        let dict = if is_bincode_path(path) {
            Self::read_bincode(reader, &origin)?
        } else {
            Self::read_json(reader, &origin)?
        };
        info!(path = %origin, entries = dict.len(), "loaded dictionary");
        Ok(dict)
    }

    /// Parse a JSON object held in memory.
    pub fn from_json_str(content: &str) -> Result<Self, DictionaryLoadError> {
        Self::read_json(content.as_bytes(), MEMORY_ORIGIN)
    }

    /// Parse a JSON object from any reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DictionaryLoadError> {
        Self::read_json(reader, MEMORY_ORIGIN)
    }

    fn read_json<R: Read>(reader: R, origin: &str) -> Result<Self, DictionaryLoadError> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let pairs = OrderedPairs::deserialize(&mut de)
            .and_then(|pairs| de.end().map(|_| pairs))
            .map_err(|source| DictionaryLoadError::Json {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self::from_pairs(pairs.0))
    }

    fn read_bincode<R: Read>(reader: R, origin: &str) -> Result<Self, DictionaryLoadError> {
        let pairs: Vec<(String, String)> =
            bincode::deserialize_from(reader).map_err(|source| DictionaryLoadError::Bincode {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self::from_pairs(pairs))
    }

    /// Save the dictionary as a bincode artifact (ordered list of pairs).
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let pairs: Vec<(&str, &str)> = self.entries().collect();
        bincode::serialize_into(writer, &pairs)?;
        Ok(())
    }

    /// Load a bincode artifact produced by `save_bincode`.
    ///
    /// Unlike `load`, a missing file is an error here.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryLoadError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| DictionaryLoadError::Io {
            origin: origin.clone(),
            source,
        })?;
        Self::read_bincode(BufReader::new(file), &origin)
    }

    /// Small built-in dictionary for demos and smoke tests.
    pub fn load_demo() -> Self {
        Self::from_pairs([
            ("romania", "românia"),
            ("romaniei", "româniei"),
            ("tara", "țară"),
            ("frumoasa", "frumoasă"),
            ("invatatura", "învățătură"),
            ("importanta", "importantă"),
            ("si", "și"),
            ("in", "în"),
            ("este", "este"),
            ("scoala", "școală"),
            ("cartile", "cărțile"),
            ("casa", "casă"),
            ("mama", "mamă"),
            ("tata", "tată"),
            ("fata", "fată"),
            ("bucuresti", "bucurești"),
            ("capitala", "capitala"),
            ("paine", "pâine"),
            ("stiinta", "știință"),
            ("masina", "mașină"),
        ])
    }
}

fn is_bincode_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("bin") | Some("bincode")
    )
}

/// JSON object read as pairs in document order.
struct OrderedPairs(Vec<(String, String)>);

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of plain word forms to diacritic forms")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    pairs.push((k, v));
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
