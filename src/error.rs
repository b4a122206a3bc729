//! Error types for a jumble run

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumbleError {
    /// The input word can't be jumbled.
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Standard input couldn't be read.
    #[error("failed to read input word: {0}")]
    Input(#[source] io::Error),

    /// The results file couldn't be created.
    #[error("failed to create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the results file failed part way through.
    #[error("failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Echoing a match to the status stream failed.
    #[error("failed to write status line: {0}")]
    Status(#[source] io::Error),
}
