//! Dictionary of valid words
//!
//! A newline-delimited wordlist loaded into a hash set for exact,
//! case-sensitive membership tests.

use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Wordlist looked up when no other path is configured
pub const DEFAULT_DICTIONARY: &str = "5desk.txt";

/// Immutable set of dictionary words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Load a dictionary, falling back to an empty one if the file can't be read
    ///
    /// A missing wordlist is not an error: every lookup simply fails. The
    /// fallback is logged so the empty result is visible.
    ///
    /// # Examples
    /// ```no_run
    /// use jumble::core::Dictionary;
    ///
    /// let dictionary = Dictionary::load("5desk.txt");
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(dictionary) => {
                log::debug!(
                    "loaded {} dictionary entries from {}",
                    dictionary.len(),
                    path.display()
                );
                dictionary
            }
            Err(e) => {
                log::warn!(
                    "dictionary {} unavailable ({e}), continuing with no words",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Load a dictionary from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn try_load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a newline-delimited wordlist
    ///
    /// Trailing whitespace is stripped from every line. Every line is an
    /// entry, and invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading from `reader` fails.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut words = FxHashSet::default();
        let mut line = Vec::new();

        while reader.read_until(b'\n', &mut line)? > 0 {
            let text = String::from_utf8_lossy(&line);
            words.insert(text.trim_end().to_string());
            line.clear();
        }

        Ok(Self { words })
    }

    /// Build a dictionary from in-memory words, taken verbatim
    ///
    /// # Examples
    /// ```
    /// use jumble::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "act"]);
    /// assert!(dictionary.contains("act"));
    /// assert!(!dictionary.contains("Cat"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
