//! Terminal and file output
//!
//! The match writer behind the results file and status stream, plus the
//! run summary.

pub mod display;
pub mod writer;

pub use display::print_jumble_result;
pub use writer::{MatchWriter, STATUS_PREFIX};
