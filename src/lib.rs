//! Jumble
//!
//! Finds every dictionary word that can be spelled with some of the letters of
//! an input word, visiting each distinct letter combination and each distinct
//! ordering of it exactly once.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble::core::{Dictionary, JumbleWord};
//! use jumble::jumble::Jumbler;
//!
//! let dictionary = Dictionary::from_words(["at", "ta", "cat", "act", "tac"]);
//! let word = JumbleWord::new("cat").unwrap();
//!
//! let matches = Jumbler::new(&dictionary).find_all(&word);
//! assert_eq!(matches, vec!["act", "cat", "tac", "at", "ta"]);
//! ```

// Core domain types
pub mod core;

// Combination and permutation search
pub mod jumble;

// Command implementations
pub mod commands;

// Results file and terminal output
pub mod output;

pub mod error;

pub use error::JumbleError;
