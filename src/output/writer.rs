//! Match writer
//!
//! Sends each match to the results file and echoes it to the status stream,
//! ticking an optional progress bar once per combination.

use crate::jumble::MatchSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io::{self, Write};

/// Prefix of every status line
pub const STATUS_PREFIX: &str = "word is in dictionary: ";

/// Which stream a write failed on
#[derive(Debug)]
pub enum WriteError {
    Output(io::Error),
    Status(io::Error),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output(e) => write!(f, "output: {e}"),
            Self::Status(e) => write!(f, "status: {e}"),
        }
    }
}

impl std::error::Error for WriteError {}

/// Writes matches one per line to `output` and echoes them to `status`
pub struct MatchWriter<O: Write, P: Write> {
    output: O,
    status: P,
    progress: ProgressBar,
    matches: Vec<String>,
}

impl<O: Write, P: Write> MatchWriter<O, P> {
    #[must_use]
    pub fn new(output: O, status: P) -> Self {
        Self {
            output,
            status,
            progress: ProgressBar::hidden(),
            matches: Vec::new(),
        }
    }

    /// Tick `progress` once per combination
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Matches written so far, in discovery order
    #[must_use]
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Flush both streams and hand back the output and the matches
    ///
    /// # Errors
    ///
    /// Returns the stream that failed to flush.
    pub fn finish(mut self) -> Result<(O, Vec<String>), WriteError> {
        self.progress.finish_and_clear();
        self.output.flush().map_err(WriteError::Output)?;
        self.status.flush().map_err(WriteError::Status)?;
        Ok((self.output, self.matches))
    }
}

impl<O: Write, P: Write> MatchSink for MatchWriter<O, P> {
    type Error = WriteError;

    fn record(&mut self, word: &str) -> Result<(), Self::Error> {
        writeln!(self.output, "{word}").map_err(WriteError::Output)?;
        self.progress
            .suspend(|| writeln!(self.status, "{STATUS_PREFIX}{word}"))
            .map_err(WriteError::Status)?;
        self.matches.push(word.to_string());
        Ok(())
    }

    fn on_combination(&mut self, _letters: &[char]) {
        self.progress.inc(1);
    }
}

/// Progress bar over `combinations` letter combinations, drawn on stderr
#[must_use]
pub fn combination_progress(combinations: u64) -> ProgressBar {
    let pb = ProgressBar::new(combinations);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} combinations ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
