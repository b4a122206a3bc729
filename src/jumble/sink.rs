//! Match destinations
//!
//! Defines where the engine sends the words it finds.

use std::convert::Infallible;

/// Receives the results of a jumble run
pub trait MatchSink {
    /// Error raised when a match can't be stored
    type Error;

    /// Store one dictionary word, in discovery order
    ///
    /// # Errors
    /// Implementation specific; the run stops at the first error.
    fn record(&mut self, word: &str) -> Result<(), Self::Error>;

    /// Called once for each distinct combination, before it is permuted
    fn on_combination(&mut self, _letters: &[char]) {}
}

/// Collects matches in memory
impl MatchSink for Vec<String> {
    type Error = Infallible;

    fn record(&mut self, word: &str) -> Result<(), Self::Error> {
        self.push(word.to_string());
        Ok(())
    }
}
