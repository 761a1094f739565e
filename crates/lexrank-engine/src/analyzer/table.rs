// Lookup-table analyzer: replays stored analyzer output keyed by word

use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;
use lexrank_core::codec::simple_lower;
use lexrank_core::{LemmaCandidate, StemCandidate};
use serde::{Deserialize, Serialize};

use crate::analyzer::{LemmaAnalyzer, StemAnalyzer};

/// Error type for table loading failures.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read analyzer table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse analyzer table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Stored analyzer output for one word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    #[serde(default)]
    pub lemmas: Vec<LemmaCandidate>,
    #[serde(default)]
    pub stems: Vec<StemCandidate>,
}

/// An analyzer backed by a precomputed word table.
///
/// The table is JSON: an object mapping each word to a [`TableEntry`].
/// Words are matched case-insensitively; keys are lowercased on load.
///
/// ```json
/// { "кошка": { "lemmas": [{"lexeme_id": 7, "forms": [0]}],
///              "stems": [{"stem_len": 3, "word_class": 1, "weight": 0.5}] } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableAnalyzer {
    entries: HashMap<String, TableEntry>,
}

impl TableAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, TableEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, TableError> {
        let raw: HashMap<String, TableEntry> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn from_entries(raw: HashMap<String, TableEntry>) -> Self {
        let mut table = Self::new();
        for (word, entry) in raw {
            table.insert(&word, entry);
        }
        tracing::debug!(words = table.len(), "analyzer table loaded");
        table
    }

    /// Add or replace the entry for `word`.
    pub fn insert(&mut self, word: &str, entry: TableEntry) {
        self.entries.insert(fold(word.chars()), entry);
    }

    pub fn get(&self, word: &[char]) -> Option<&TableEntry> {
        self.entries.get(&fold(word.iter().copied()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fold(word: impl Iterator<Item = char>) -> String {
    word.map(simple_lower).collect()
}

impl LemmaAnalyzer for TableAnalyzer {
    fn analyze_lemmas(&self, word: &[char], word_len: usize) -> Vec<LemmaCandidate> {
        word.get(..word_len)
            .and_then(|w| self.get(w))
            .map(|e| e.lemmas.clone())
            .unwrap_or_default()
    }
}

impl StemAnalyzer for TableAnalyzer {
    fn analyze_stems(&self, word: &[char], word_len: usize) -> Vec<StemCandidate> {
        word.get(..word_len)
            .and_then(|w| self.get(w))
            .map(|e| e.stems.clone())
            .unwrap_or_default()
    }
}
