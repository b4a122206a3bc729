//! Jumble - CLI
//!
//! Reads a word, finds every dictionary word hidden in its letters, and writes
//! them to `<word>.txt`.

use anyhow::{Context, Result};
use clap::Parser;
use jumble::{
    commands::{JumbleConfig, jumble_word, read_word},
    core::{DEFAULT_DICTIONARY, Dictionary},
    output::print_jumble_result,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Find every dictionary word hidden in the letters of a word",
    version,
    author
)]
struct Cli {
    /// Word to jumble (read from the first line of stdin if omitted)
    word: Option<String>,

    /// Newline-delimited wordlist; a missing file means an empty dictionary
    #[arg(short, long, env = "JUMBLE_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Directory the <word>.txt results file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Don't echo matches to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Show a progress bar over letter combinations
    #[arg(short, long)]
    progress: bool,

    /// Print a summary once the run completes
    #[arg(short, long)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let word = match cli.word {
        Some(word) => word,
        None => read_word(io::stdin().lock())?,
    };

    let dictionary = Dictionary::load(&cli.dictionary);

    let config = JumbleConfig {
        word,
        output_dir: cli.output_dir,
        progress: cli.progress,
    };

    let result = if cli.quiet {
        jumble_word(&config, &dictionary, io::sink())
    } else {
        jumble_word(&config, &dictionary, io::stdout().lock())
    }
    .with_context(|| format!("failed to jumble {:?}", config.word))?;

    if cli.summary {
        print_jumble_result(&result);
    }

    Ok(())
}
