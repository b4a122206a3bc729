//! Jumble command
//!
//! Jumbles one word against a dictionary and writes the matches to
//! `<word>.txt`.

use crate::core::{Dictionary, JumbleWord};
use crate::error::JumbleError;
use crate::jumble::{JumbleStats, Jumbler};
use crate::output::writer::{MatchWriter, WriteError, combination_progress};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Configuration for jumbling a word
pub struct JumbleConfig {
    pub word: String,
    /// Directory the `<word>.txt` results file is created in
    pub output_dir: PathBuf,
    /// Draw a progress bar over combinations on stderr
    pub progress: bool,
}

impl JumbleConfig {
    #[must_use]
    pub fn new(word: String) -> Self {
        Self {
            word,
            output_dir: PathBuf::from("."),
            progress: false,
        }
    }
}

/// Result of jumbling a word
pub struct JumbleResult {
    pub word: String,
    pub output_path: PathBuf,
    pub dictionary_size: usize,
    /// Matches in discovery order, as written to the results file
    pub matches: Vec<String>,
    pub stats: JumbleStats,
    pub duration: Duration,
}

/// Read the word to jumble from the first line of `reader`
///
/// Only the line terminator is removed. End of input yields an empty word.
///
/// # Errors
///
/// Returns `JumbleError::Input` if reading fails.
pub fn read_word<R: BufRead>(mut reader: R) -> Result<String, JumbleError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(JumbleError::Input)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

/// Jumble the configured word, writing matches to its results file
///
/// Every match is also echoed to `status` as `word is in dictionary: <word>`.
///
/// # Errors
///
/// Returns an error if:
/// - The word contains whitespace, a control character, or a path separator
/// - The results file can't be created or written
/// - Writing to `status` fails
pub fn jumble_word<P: Write>(
    config: &JumbleConfig,
    dictionary: &Dictionary,
    status: P,
) -> Result<JumbleResult, JumbleError> {
    let start = Instant::now();
    let word = JumbleWord::new(config.word.as_str())?;

    let output_path = config.output_dir.join(word.output_file_name());
    let file = File::create(&output_path).map_err(|source| JumbleError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;

    let progress = if config.progress {
        combination_progress(word.combination_count())
    } else {
        ProgressBar::hidden()
    };

    let mut writer = MatchWriter::new(BufWriter::new(file), status).with_progress(progress);
    let stats = Jumbler::new(dictionary)
        .jumble(&word, &mut writer)
        .map_err(|e| write_error(e, &output_path))?;
    let (_, matches) = writer
        .finish()
        .map_err(|e| write_error(e, &output_path))?;

    log::debug!(
        "wrote {} matches to {}",
        matches.len(),
        output_path.display()
    );

    Ok(JumbleResult {
        word: config.word.clone(),
        output_path,
        dictionary_size: dictionary.len(),
        matches,
        stats,
        duration: start.elapsed(),
    })
}

fn write_error(err: WriteError, path: &Path) -> JumbleError {
    match err {
        WriteError::Output(source) => JumbleError::WriteOutput {
            path: path.to_path_buf(),
            source,
        },
        WriteError::Status(source) => JumbleError::Status(source),
    }
}
