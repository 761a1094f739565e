// Processing options and call status codes

use bitflags::bitflags;

bitflags! {
    /// Which analyzer passes a `process` call runs.
    ///
    /// The bits combine freely. An empty set still validates its input but
    /// performs no analysis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Options: u32 {
        /// Rank exact-lemma candidates.
        const EXACT_LEMMA = 1;
        /// Select fuzzy stem candidates.
        const FUZZY_STEM = 2;
    }
}

impl Options {
    /// Parse a comma-separated list such as `"exact,fuzzy"`.
    /// Unknown names return `None`.
    pub fn parse_list(list: &str) -> Option<Self> {
        let mut options = Options::empty();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            options |= match name {
                "exact" | "lemma" => Options::EXACT_LEMMA,
                "fuzzy" | "stem" => Options::FUZZY_STEM,
                "both" | "all" => Options::all(),
                _ => return None,
            };
        }
        Some(options)
    }
}

/// Outcome of one `process` call, as reported across the C ABI and by the CLI.
///
/// Values follow the errno numbers of the equivalent POSIX conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 0,
    /// Sink missing, or word reference unusable for its declared length.
    InvalidArgument = 22,
    /// Word longer than the lowercasing buffer.
    Overflow = 75,
}

impl StatusCode {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}

impl From<StatusCode> for i32 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}
