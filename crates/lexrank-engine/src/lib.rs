//! Lemma ranking and fuzzy stem selection over morphological analyzer output.
//!
//! For one input word, the [`Engine`] asks an exact-lemma analyzer and a
//! fuzzy-stem analyzer for candidates, ranks and filters them, and emits the
//! survivors to an [`OutputSink`] with weights suitable for indexing or query
//! expansion.
//!
//! - [`analyzer`] -- analyzer traits, the capacity guard, and the lookup-table analyzer
//! - [`lemma`] -- primary-form ordering, unresolved-tail trimming, `1/N` weights
//! - [`stem`] -- greedy selection under a retained-mass budget and weight floor
//! - [`sink`] -- the output sink trait and a collecting implementation
//! - [`engine`] -- input validation and the `process` entry point
//! - [`config`] -- capacities and thresholds

pub mod analyzer;
pub mod config;
pub mod engine;
pub mod lemma;
pub mod sink;
pub mod stem;

pub use analyzer::{LemmaAnalyzer, StemAnalyzer};
#[cfg(feature = "table")]
pub use analyzer::{TableAnalyzer, TableEntry, TableError};
pub use config::EngineConfig;
pub use engine::{Engine, ProcessError, ProcessReport};
pub use sink::{CollectingSink, Emission, OutputSink};
