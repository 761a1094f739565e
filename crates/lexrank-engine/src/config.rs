// Engine limits and selection thresholds

use lexrank_core::codec::DEFAULT_LOWERCASE_CAPACITY;

/// Maximum number of candidates read from one analyzer call.
pub const MAX_CANDIDATES: usize = 32;

/// Maximum number of form tags read per candidate.
pub const MAX_FORMS: usize = 128;

/// Share of total stem weight that selection may consume.
pub const RETAINED_MASS: f32 = 0.8;

/// Stems must weigh strictly more than this to be emitted.
pub const WEIGHT_FLOOR: f32 = 0.1;

/// Limits and thresholds used by [`Engine`](crate::engine::Engine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub max_candidates: usize,
    pub max_forms: usize,
    /// Longest word, in characters, that fuzzy selection can lowercase.
    pub lowercase_capacity: usize,
    pub retained_mass: f32,
    pub weight_floor: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_candidates: MAX_CANDIDATES,
            max_forms: MAX_FORMS,
            lowercase_capacity: DEFAULT_LOWERCASE_CAPACITY,
            retained_mass: RETAINED_MASS,
            weight_floor: WEIGHT_FLOOR,
        }
    }
}

impl EngineConfig {
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_max_forms(mut self, max_forms: usize) -> Self {
        self.max_forms = max_forms;
        self
    }

    pub fn with_lowercase_capacity(mut self, capacity: usize) -> Self {
        self.lowercase_capacity = capacity;
        self
    }
}
