//! Command implementations

pub mod jumble;

pub use jumble::{JumbleConfig, JumbleResult, jumble_word, read_word};
