// Engine: validates a call, then runs lemma ranking and stem selection.
//
// Design notes:
// - Analyzers and the lowercaser are injected trait objects, loaded once
//   and shared read-only across calls; the engine holds no per-call state.
// - Lemma ranking runs before stem selection. A stem-side failure is still
//   reported after lemmas were emitted; those emissions are not retracted.
// - Nothing is emitted before input validation has passed.

use lexrank_core::{BoundedLowercaser, CodecError, Lowercaser, Options, StatusCode};

use crate::analyzer::{LemmaAnalyzer, StemAnalyzer, read_lemmas, read_stems};
use crate::config::EngineConfig;
use crate::lemma::{emit_lemmas, rank_lemmas};
use crate::sink::OutputSink;
use crate::stem::{StemSelection, emit_stems, select_stems};

/// Error type for `process` failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    /// Sink missing, or word reference unusable for its declared length.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The word does not fit the lowercasing buffer.
    #[error(transparent)]
    Overflow(#[from] CodecError),
}

impl ProcessError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProcessError::InvalidArgument(_) => StatusCode::InvalidArgument,
            ProcessError::Overflow(_) => StatusCode::Overflow,
        }
    }
}

/// Counts of what one successful call emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub lemmas: usize,
    pub stems: usize,
}

/// Lemma/stem engine over a pair of analyzers.
pub struct Engine {
    lemma_analyzer: Box<dyn LemmaAnalyzer + Send + Sync>,
    stem_analyzer: Box<dyn StemAnalyzer + Send + Sync>,
    lowercaser: Box<dyn Lowercaser + Send + Sync>,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the default configuration and a bounded
    /// lowercaser sized from it.
    pub fn new(
        lemma_analyzer: impl LemmaAnalyzer + Send + Sync + 'static,
        stem_analyzer: impl StemAnalyzer + Send + Sync + 'static,
    ) -> Self {
        let config = EngineConfig::default();
        Self {
            lemma_analyzer: Box::new(lemma_analyzer),
            stem_analyzer: Box::new(stem_analyzer),
            lowercaser: Box::new(BoundedLowercaser::new(config.lowercase_capacity)),
            config,
        }
    }

    /// Create an engine that answers both passes from one lookup table.
    #[cfg(feature = "table")]
    pub fn from_table(table: crate::analyzer::TableAnalyzer) -> Self {
        let table = std::sync::Arc::new(table);
        Self::new(table.clone(), table)
    }

    /// Replace the configuration. This also resets the lowercaser to a
    /// [`BoundedLowercaser`] with the configured capacity, so call
    /// [`Engine::with_lowercaser`] afterwards to install a custom one.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.lowercaser = Box::new(BoundedLowercaser::new(config.lowercase_capacity));
        self.config = config;
        self
    }

    pub fn with_lowercaser(
        mut self,
        lowercaser: impl Lowercaser + Send + Sync + 'static,
    ) -> Self {
        self.lowercaser = Box::new(lowercaser);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank lemmas and/or select stems for `word[..word_len]`, emitting them
    /// to `sink` in rank order.
    ///
    /// Fails with [`ProcessError::InvalidArgument`] before any analyzer runs
    /// when `sink` is missing, when `word` is missing with a nonzero
    /// `word_len`, or when `word_len` exceeds the slice. A missing word with
    /// zero length is an empty word. Fails with [`ProcessError::Overflow`]
    /// when fuzzy stems are requested, the stem analyzer has candidates, and
    /// the word is longer than the lowercasing capacity.
    pub fn process(
        &self,
        sink: Option<&mut dyn OutputSink>,
        options: Options,
        word: Option<&[char]>,
        word_len: usize,
    ) -> Result<ProcessReport, ProcessError> {
        let sink = sink.ok_or(ProcessError::InvalidArgument("output sink is missing"))?;
        let word: &[char] = match word {
            Some(w) => w.get(..word_len).ok_or(ProcessError::InvalidArgument(
                "declared word length exceeds the word",
            ))?,
            None if word_len == 0 => &[],
            None => return Err(ProcessError::InvalidArgument("word is missing")),
        };

        let mut report = ProcessReport::default();
        if options.contains(Options::EXACT_LEMMA) {
            report.lemmas = self.process_lemmas(word, sink);
        }
        if options.contains(Options::FUZZY_STEM) {
            report.stems = self.process_stems(word, sink)?;
        }
        Ok(report)
    }

    /// [`Engine::process`] for a Rust string and a present sink.
    pub fn process_str(
        &self,
        sink: &mut dyn OutputSink,
        options: Options,
        word: &str,
    ) -> Result<ProcessReport, ProcessError> {
        let chars: Vec<char> = word.chars().collect();
        self.process(Some(sink), options, Some(&chars), chars.len())
    }

    /// [`Engine::process`] reduced to a status code.
    pub fn process_status(
        &self,
        sink: Option<&mut dyn OutputSink>,
        options: Options,
        word: Option<&[char]>,
        word_len: usize,
    ) -> StatusCode {
        match self.process(sink, options, word, word_len) {
            Ok(_) => StatusCode::Ok,
            Err(e) => e.status(),
        }
    }

    fn process_lemmas(&self, word: &[char], sink: &mut dyn OutputSink) -> usize {
        let candidates = read_lemmas(self.lemma_analyzer.as_ref(), word, &self.config);
        if candidates.is_empty() {
            return 0;
        }
        let found = candidates.len();
        let ranked = rank_lemmas(candidates);
        tracing::debug!(found, kept = ranked.len(), "lemmas ranked");
        emit_lemmas(&ranked, sink)
    }

    fn process_stems(
        &self,
        word: &[char],
        sink: &mut dyn OutputSink,
    ) -> Result<usize, ProcessError> {
        let candidates = read_stems(self.stem_analyzer.as_ref(), word, &self.config);
        if candidates.is_empty() {
            return Ok(0);
        }
        let lowered = self.lowercaser.lowercase(word)?;
        let found = candidates.len();
        let selected = select_stems(candidates, StemSelection::from(&self.config));
        tracing::debug!(found, kept = selected.len(), "stems selected");
        Ok(emit_stems(&selected, &lowered, sink))
    }
}
