//! Shared types for lexical candidate ranking.
//!
//! - [`form`] -- grammatical form tags and the unknown-form sentinel
//! - [`candidate`] -- exact-lemma and fuzzy-stem candidates as produced by analyzers
//! - [`options`] -- analyzer pass selection and call status codes
//! - [`codec`] -- bounded lowercasing
//! - [`bounded`] -- capacity-checked sequences for analyzer output

pub mod bounded;
pub mod candidate;
pub mod codec;
pub mod form;
pub mod options;

pub use bounded::Bounded;
pub use candidate::{LemmaCandidate, StemCandidate};
pub use codec::{BoundedLowercaser, CodecError, Lowercaser};
pub use form::FormTag;
pub use options::{Options, StatusCode};
