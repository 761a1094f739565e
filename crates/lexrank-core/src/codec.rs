// Lowercasing into a fixed-capacity scratch buffer

/// Default capacity of the lowercasing buffer, in characters.
pub const DEFAULT_LOWERCASE_CAPACITY: usize = 63;

/// Error type for lowercasing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("word of {len} characters exceeds lowercase buffer capacity of {capacity}")]
    Overflow { len: usize, capacity: usize },
}

/// Converts a word to lowercase.
///
/// Implementations must preserve the character count, since stem lengths
/// computed on the original word are applied to the lowered one.
pub trait Lowercaser {
    fn lowercase(&self, word: &[char]) -> Result<Vec<char>, CodecError>;
}

/// Convert a character to its simple lowercase equivalent.
///
/// Multi-character expansions are cut to their first character so the
/// mapping stays one-to-one.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lowercaser with a hard limit on word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedLowercaser {
    capacity: usize,
}

impl BoundedLowercaser {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BoundedLowercaser {
    fn default() -> Self {
        Self::new(DEFAULT_LOWERCASE_CAPACITY)
    }
}

impl Lowercaser for BoundedLowercaser {
    fn lowercase(&self, word: &[char]) -> Result<Vec<char>, CodecError> {
        if word.len() > self.capacity {
            return Err(CodecError::Overflow {
                len: word.len(),
                capacity: self.capacity,
            });
        }
        Ok(word.iter().map(|&c| simple_lower(c)).collect())
    }
}
