// Output sink: receives ranked lemmas and selected stems

use lexrank_core::FormTag;
use serde::Serialize;

/// Receiver for emitted lexical items.
///
/// The engine calls these methods in rank order and never retains the
/// buffers it passes: `word` and `forms` are valid only for the duration of
/// the call, so implementations copy what they need.
pub trait OutputSink {
    /// Receive one exact lemma with its share of the homonym weight.
    fn add_lemma(&mut self, lexeme_id: u32, weight: f32, forms: &[FormTag]);

    /// Receive one fuzzy stem. `word` is the lowercased word and the stem is
    /// its first `stem_len` characters.
    fn add_stem(
        &mut self,
        word: &[char],
        stem_len: usize,
        word_class: u32,
        weight: f32,
        forms: &[FormTag],
    );
}

/// An owned copy of one sink call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Emission {
    Lemma {
        lexeme_id: u32,
        weight: f32,
        forms: Vec<FormTag>,
    },
    Stem {
        word: String,
        stem: String,
        word_class: u32,
        weight: f32,
        forms: Vec<FormTag>,
    },
}

impl Emission {
    pub fn weight(&self) -> f32 {
        match self {
            Emission::Lemma { weight, .. } | Emission::Stem { weight, .. } => *weight,
        }
    }

    pub fn forms(&self) -> &[FormTag] {
        match self {
            Emission::Lemma { forms, .. } | Emission::Stem { forms, .. } => forms,
        }
    }
}

/// Sink that records every call in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CollectingSink {
    emissions: Vec<Emission>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    pub fn into_emissions(self) -> Vec<Emission> {
        self.emissions
    }

    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }

    pub fn clear(&mut self) {
        self.emissions.clear();
    }

    pub fn lemmas(&self) -> impl Iterator<Item = &Emission> {
        self.emissions
            .iter()
            .filter(|e| matches!(e, Emission::Lemma { .. }))
    }

    pub fn stems(&self) -> impl Iterator<Item = &Emission> {
        self.emissions
            .iter()
            .filter(|e| matches!(e, Emission::Stem { .. }))
    }
}

impl OutputSink for CollectingSink {
    fn add_lemma(&mut self, lexeme_id: u32, weight: f32, forms: &[FormTag]) {
        self.emissions.push(Emission::Lemma {
            lexeme_id,
            weight,
            forms: forms.to_vec(),
        });
    }

    fn add_stem(
        &mut self,
        word: &[char],
        stem_len: usize,
        word_class: u32,
        weight: f32,
        forms: &[FormTag],
    ) {
        let stem_len = stem_len.min(word.len());
        self.emissions.push(Emission::Stem {
            word: word.iter().collect(),
            stem: word[..stem_len].iter().collect(),
            word_class,
            weight,
            forms: forms.to_vec(),
        });
    }
}
