//! Core domain types for jumbling
//!
//! The input word and the dictionary it is checked against. Both are
//! immutable once built.

mod dictionary;
mod word;

pub use dictionary::{DEFAULT_DICTIONARY, Dictionary};
pub use word::{JumbleWord, WordError};
