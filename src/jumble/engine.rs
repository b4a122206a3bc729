//! Jumble engine
//!
//! Runs the permutation pass over every combination of a word's letters and
//! checks each permutation against the dictionary.

use super::combinations::for_each_combination;
use super::permutations::for_each_permutation;
use super::sink::MatchSink;
use crate::core::{Dictionary, JumbleWord};

/// Counters for a single jumble run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumbleStats {
    /// Distinct letter combinations visited
    pub combinations: u64,
    /// Permutations looked up in the dictionary
    pub permutations: u64,
    /// Permutations found in the dictionary
    pub matches: u64,
}

/// Finds dictionary words hidden in a word's letters
pub struct Jumbler<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Jumbler<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Jumble `word`, sending every match to `sink`
    ///
    /// Combinations are visited in depth-first order over the sorted letters,
    /// and each one is permuted before the next combination is built, so
    /// matches arrive grouped by combination. No combination or permutation
    /// is visited twice.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if it fails to record a match; the run stops
    /// there.
    pub fn jumble<S: MatchSink>(
        &self,
        word: &JumbleWord,
        sink: &mut S,
    ) -> Result<JumbleStats, S::Error> {
        let mut stats = JumbleStats::default();
        let mut candidate = String::with_capacity(word.text().len());
        let mut buffer: Vec<char> = Vec::with_capacity(word.len());

        for_each_combination(
            word.letters(),
            &mut buffer,
            0,
            &mut |combination: &[char]| -> Result<(), S::Error> {
                stats.combinations += 1;
                sink.on_combination(combination);

                // Permutations start from sorted order
                let mut letters = combination.to_vec();
                letters.sort_unstable();

                for_each_permutation(
                    &mut letters,
                    0,
                    &mut |permutation: &[char]| -> Result<(), S::Error> {
                        stats.permutations += 1;
                        candidate.clear();
                        candidate.extend(permutation);

                        if self.dictionary.contains(&candidate) {
                            stats.matches += 1;
                            sink.record(&candidate)?;
                        }
                        Ok(())
                    },
                )
            },
        )?;

        log::debug!(
            "jumbled {:?}: {} combinations, {} permutations, {} matches",
            word.text(),
            stats.combinations,
            stats.permutations,
            stats.matches
        );

        Ok(stats)
    }

    /// Collect every match for `word` in discovery order
    ///
    /// # Examples
    /// ```
    /// use jumble::core::{Dictionary, JumbleWord};
    /// use jumble::jumble::Jumbler;
    ///
    /// let dictionary = Dictionary::from_words(["at", "cat", "act", "dog"]);
    /// let word = JumbleWord::new("cat").unwrap();
    ///
    /// let matches = Jumbler::new(&dictionary).find_all(&word);
    /// assert_eq!(matches, vec!["act", "cat", "at"]);
    /// ```
    #[must_use]
    pub fn find_all(&self, word: &JumbleWord) -> Vec<String> {
        let mut matches = Vec::new();
        match self.jumble(word, &mut matches) {
            Ok(_) => matches,
            Err(never) => match never {},
        }
    }
}
