// Grammatical form tags attached to analyzer candidates

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit grammatical form identifier (case, number, tense, ...).
///
/// Tags order by their raw value, which places [`FormTag::UNKNOWN`] after
/// every resolved form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormTag(pub u8);

impl FormTag {
    /// Sentinel for a slot whose grammatical form the analyzer could not resolve.
    pub const UNKNOWN: FormTag = FormTag(0xFF);

    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl From<u8> for FormTag {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<FormTag> for u8 {
    fn from(tag: FormTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FormTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("?")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Primary tag of a tag list: the first tag, or `UNKNOWN` for an empty list.
pub fn primary_tag(forms: &[FormTag]) -> FormTag {
    forms.first().copied().unwrap_or(FormTag::UNKNOWN)
}
