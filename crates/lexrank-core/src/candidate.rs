// Analyzer candidate types: exact lemmas and fuzzy stems

use serde::{Deserialize, Serialize};

use crate::form::{FormTag, primary_tag};

/// One exact-lemma reading of a word form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaCandidate {
    /// Dictionary identifier of the lexeme.
    pub lexeme_id: u32,
    /// Grammatical form tags in analyzer order. The first one is primary.
    #[serde(default)]
    pub forms: Vec<FormTag>,
}

impl LemmaCandidate {
    pub fn new(lexeme_id: u32, forms: Vec<FormTag>) -> Self {
        Self { lexeme_id, forms }
    }

    /// The tag candidates are ranked by. `UNKNOWN` when the list is empty.
    pub fn primary(&self) -> FormTag {
        primary_tag(&self.forms)
    }
}

/// One fuzzy segmentation of a word form.
///
/// The stem is not stored as text: it is the first `stem_len` characters
/// of the lowercased word the candidate was produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemCandidate {
    /// Length of the stem prefix within the word, in characters.
    pub stem_len: usize,
    /// Morphological class of the stem.
    pub word_class: u32,
    /// Analyzer confidence in (0, 1].
    pub weight: f32,
    #[serde(default)]
    pub forms: Vec<FormTag>,
}

impl StemCandidate {
    pub fn new(stem_len: usize, word_class: u32, weight: f32, forms: Vec<FormTag>) -> Self {
        Self {
            stem_len,
            word_class,
            weight,
            forms,
        }
    }

    /// Slice the stem out of `word`. Returns `None` if the stem is longer
    /// than the word.
    pub fn stem<'w>(&self, word: &'w [char]) -> Option<&'w [char]> {
        word.get(..self.stem_len)
    }
}
