// Analyzer collaborator traits and the capacity guard around them

#[cfg(feature = "table")]
mod table;

#[cfg(feature = "table")]
pub use table::{TableAnalyzer, TableEntry, TableError};

use std::sync::Arc;

use lexrank_core::{Bounded, FormTag, LemmaCandidate, StemCandidate};

use crate::config::EngineConfig;

/// Source of exact-lemma candidates for a word.
///
/// Implementations are loaded once and shared; they must not keep per-call
/// mutable state.
pub trait LemmaAnalyzer {
    /// Return every lemma reading of `word[..word_len]`.
    fn analyze_lemmas(&self, word: &[char], word_len: usize) -> Vec<LemmaCandidate>;
}

/// Source of fuzzy stem candidates for a word.
pub trait StemAnalyzer {
    /// Return every stem segmentation of `word[..word_len]`, each with a
    /// confidence weight.
    fn analyze_stems(&self, word: &[char], word_len: usize) -> Vec<StemCandidate>;
}

impl<T: LemmaAnalyzer + ?Sized> LemmaAnalyzer for Arc<T> {
    fn analyze_lemmas(&self, word: &[char], word_len: usize) -> Vec<LemmaCandidate> {
        (**self).analyze_lemmas(word, word_len)
    }
}

impl<T: StemAnalyzer + ?Sized> StemAnalyzer for Arc<T> {
    fn analyze_stems(&self, word: &[char], word_len: usize) -> Vec<StemCandidate> {
        (**self).analyze_stems(word, word_len)
    }
}

/// Run the lemma analyzer and clip its output to the configured capacities.
pub(crate) fn read_lemmas(
    analyzer: &dyn LemmaAnalyzer,
    word: &[char],
    config: &EngineConfig,
) -> Bounded<LemmaCandidate> {
    let raw = analyzer.analyze_lemmas(word, word.len());
    let (candidates, dropped) = Bounded::clip(raw, config.max_candidates);
    if dropped > 0 {
        tracing::warn!(
            dropped,
            capacity = config.max_candidates,
            "lemma analyzer returned more candidates than capacity"
        );
    }
    clip_each(candidates, config, |c| &mut c.forms)
}

/// Run the stem analyzer, clip its output, and discard candidates that
/// break the analyzer contract (stem longer than the word, weight not a
/// finite positive number).
pub(crate) fn read_stems(
    analyzer: &dyn StemAnalyzer,
    word: &[char],
    config: &EngineConfig,
) -> Bounded<StemCandidate> {
    let raw = analyzer.analyze_stems(word, word.len());
    let (candidates, dropped) = Bounded::clip(raw, config.max_candidates);
    if dropped > 0 {
        tracing::warn!(
            dropped,
            capacity = config.max_candidates,
            "stem analyzer returned more candidates than capacity"
        );
    }
    let mut candidates = clip_each(candidates, config, |c| &mut c.forms);
    let before = candidates.len();
    candidates.retain(|c| c.stem_len <= word.len() && c.weight.is_finite() && c.weight > 0.0);
    if candidates.len() < before {
        tracing::warn!(
            discarded = before - candidates.len(),
            "stem analyzer returned malformed candidates"
        );
    }
    candidates
}

fn clip_each<T>(
    candidates: Bounded<T>,
    config: &EngineConfig,
    forms: impl Fn(&mut T) -> &mut Vec<FormTag>,
) -> Bounded<T> {
    let capacity = candidates.capacity();
    let mut items = candidates.into_vec();
    for item in &mut items {
        let tags = forms(item);
        let (clipped, dropped) = Bounded::clip(std::mem::take(tags), config.max_forms);
        if dropped > 0 {
            tracing::warn!(dropped, capacity = config.max_forms, "form tag list clipped");
        }
        *tags = clipped.into_vec();
    }
    Bounded::clip(items, capacity).0
}
