use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Narrow a word list to the candidates consistent with prior guesses.
///
/// Each guess token interleaves the guessed letters with qualifier
/// characters, one qualifier immediately after each letter:
/// '.' means the letter is in this spot, '?' means it is in the word but
/// not in this spot, and '-' means it is not in the word. For example
/// `w-o-r.d?` says w and o are not in the word, r is in the third spot,
/// and d is present somewhere else.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Guess tokens, in the order they were played
    #[arg(value_name = "word")]
    pub guesses: Vec<String>,

    /// Length of each word
    #[arg(short = 'n', long, default_value_t = 5)]
    pub length: usize,

    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long, default_value = "words_alpha.txt")]
    pub wordlist: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long = "log-level", default_value = "info")]
    pub log_level: LevelFilter,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
