// Library interface for wordle-sieve
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod logging;
pub mod parser;
pub mod wordbank;

pub use engine::{solve, Engine};
pub use parser::{parse_guess, parse_guesses, Feedback, Guess, ParseError};
pub use wordbank::{load_words_from_file, load_words_from_str};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level failure modes, split so the caller can tell expected
/// validation failures apart from unexpected faults.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Validation(#[from] ParseError),
    #[error("failed to read word list '{}': {source}", .path.display())]
    WordList { path: PathBuf, source: io::Error },
}
