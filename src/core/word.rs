//! Input word representation
//!
//! A `JumbleWord` keeps the word as typed plus a sorted copy of its letters,
//! which puts repeated letters next to each other for combination generation.

use rustc_hash::FxHashMap;
use std::fmt;

/// The word whose letters are jumbled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumbleWord {
    text: String,
    letters: Vec<char>,
}

/// Error type for words that cannot be jumbled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Whitespace inside the word (only single words are jumbled)
    Whitespace,
    /// A character that cannot appear in the output file name
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitespace => write!(f, "Word must not contain whitespace"),
            Self::InvalidCharacter(ch) => {
                write!(f, "Word contains invalid character {ch:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl JumbleWord {
    /// Create a new word to jumble
    ///
    /// The text is kept as given: no case folding, no trimming. An empty word
    /// is valid and simply has no combinations.
    ///
    /// # Errors
    /// Returns `WordError` if the text contains whitespace, a control
    /// character, or a path separator, since the word names its output file.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::JumbleWord;
    ///
    /// let word = JumbleWord::new("cat").unwrap();
    /// assert_eq!(word.letters(), &['a', 'c', 't']);
    ///
    /// assert!(JumbleWord::new("two words").is_err());
    /// assert!(JumbleWord::new("../cat").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if let Some(ch) = text.chars().find(|&c| !is_file_name_char(c)) {
            if ch.is_whitespace() {
                return Err(WordError::Whitespace);
            }
            return Err(WordError::InvalidCharacter(ch));
        }

        let mut letters: Vec<char> = text.chars().collect();
        letters.sort_unstable();

        Ok(Self { text, letters })
    }

    /// Get the word as typed
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in sorted order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Name of the file the matches are written to: `<word>.txt`
    #[must_use]
    pub fn output_file_name(&self) -> String {
        format!("{}.txt", self.text)
    }

    /// Number of distinct non-empty letter combinations
    ///
    /// A letter appearing `c` times can be taken 0..=c times, so the count is
    /// the product of `c + 1` over distinct letters, minus the empty choice.
    #[must_use]
    pub fn combination_count(&self) -> u64 {
        self.letter_counts()
            .values()
            .fold(1_u64, |acc, &count| acc.saturating_mul(count as u64 + 1))
            - 1
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

fn is_file_name_char(ch: char) -> bool {
    !(ch.is_whitespace() || ch.is_control() || matches!(ch, '/' | '\\'))
}

impl fmt::Display for JumbleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_letters_are_sorted() {
        let word = JumbleWord::new("jumble").unwrap();
        assert_eq!(word.text(), "jumble");
        assert_eq!(word.letters(), &['b', 'e', 'j', 'l', 'm', 'u']);
    }

    #[test]
    fn word_keeps_case() {
        let word = JumbleWord::new("Cat").unwrap();
        assert_eq!(word.text(), "Cat");
        assert_eq!(word.letters(), &['C', 'a', 't']);
    }

    #[test]
    fn word_empty_is_valid() {
        let word = JumbleWord::new("").unwrap();
        assert!(word.is_empty());
        assert_eq!(word.len(), 0);
        assert_eq!(word.combination_count(), 0);
        assert_eq!(word.output_file_name(), ".txt");
    }

    #[test]
    fn word_rejects_whitespace() {
        assert_eq!(JumbleWord::new("two words"), Err(WordError::Whitespace));
        assert_eq!(JumbleWord::new("tab\there"), Err(WordError::Whitespace));
    }

    #[test]
    fn word_rejects_path_separators() {
        assert_eq!(
            JumbleWord::new("a/b"),
            Err(WordError::InvalidCharacter('/'))
        );
        assert_eq!(
            JumbleWord::new("a\\b"),
            Err(WordError::InvalidCharacter('\\'))
        );
        assert_eq!(
            JumbleWord::new("a\u{0}b"),
            Err(WordError::InvalidCharacter('\u{0}'))
        );
    }

    #[test]
    fn word_counts_letters_not_bytes() {
        let word = JumbleWord::new("café").unwrap();
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_letter_counts() {
        let word = JumbleWord::new("banana").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'a'), Some(&3));
        assert_eq!(counts.get(&'n'), Some(&2));
        assert_eq!(counts.get(&'b'), Some(&1));
    }

    #[test]
    fn combination_count_distinct_letters() {
        // 2^3 - 1
        let word = JumbleWord::new("cat").unwrap();
        assert_eq!(word.combination_count(), 7);
    }

    #[test]
    fn combination_count_repeated_letters() {
        // a: 0..=2, b: 0..=1 -> 3 * 2 - 1
        let word = JumbleWord::new("aab").unwrap();
        assert_eq!(word.combination_count(), 5);

        let word = JumbleWord::new("aaaa").unwrap();
        assert_eq!(word.combination_count(), 4);
    }

    #[test]
    fn word_output_file_name() {
        let word = JumbleWord::new("listen").unwrap();
        assert_eq!(word.output_file_name(), "listen.txt");
    }

    #[test]
    fn word_display() {
        let word = JumbleWord::new("silent").unwrap();
        assert_eq!(format!("{word}"), "silent");
    }
}
