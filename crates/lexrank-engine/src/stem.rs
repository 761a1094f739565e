// Fuzzy stem selection: greedy pick under a retained-mass budget and weight floor

use lexrank_core::{Bounded, StemCandidate};

use crate::config::EngineConfig;
use crate::sink::OutputSink;

/// Thresholds for stem selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StemSelection {
    /// Fraction of the total candidate weight the selection may consume.
    pub retained_mass: f32,
    /// A candidate must weigh strictly more than this to be selected.
    pub weight_floor: f32,
}

impl From<&EngineConfig> for StemSelection {
    fn from(config: &EngineConfig) -> Self {
        Self {
            retained_mass: config.retained_mass,
            weight_floor: config.weight_floor,
        }
    }
}

impl Default for StemSelection {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

/// Pick the stems worth emitting, heaviest first.
///
/// Candidates are stably sorted by descending weight. The budget starts at
/// `retained_mass * total_weight`. Walking the sorted list, a candidate is
/// taken while the budget is still positive and its own weight is above the
/// floor; its weight is then subtracted from the budget. The walk stops at
/// the first candidate that fails either test.
///
/// The budget is tested before it is charged, so the candidate that drives
/// it to zero or below is still taken.
pub fn select_stems(
    candidates: Bounded<StemCandidate>,
    selection: StemSelection,
) -> Vec<StemCandidate> {
    let mut sorted = candidates.into_vec();
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let total: f32 = sorted.iter().map(|c| c.weight).sum();
    let budget = selection.retained_mass * total;

    sorted
        .into_iter()
        .scan(budget, |budget, c| {
            if *budget > 0.0 && c.weight > selection.weight_floor {
                *budget -= c.weight;
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

/// Emit selected stems against the lowercased word.
///
/// Returns the number of stems emitted.
pub fn emit_stems(
    selected: &[StemCandidate],
    lowered: &[char],
    sink: &mut dyn OutputSink,
) -> usize {
    for c in selected {
        sink.add_stem(lowered, c.stem_len, c.word_class, c.weight, &c.forms);
    }
    selected.len()
}
