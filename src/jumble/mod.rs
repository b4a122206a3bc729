//! Jumbling algorithms
//!
//! Combination and permutation generators, and the engine that ties them to
//! dictionary lookups.

pub mod combinations;
mod engine;
pub mod permutations;
mod sink;

pub use engine::{JumbleStats, Jumbler};
pub use sink::MatchSink;
