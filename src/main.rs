use clap::CommandFactory;
use log::info;
use std::process::ExitCode;
use wordle_sieve::cli::{self, Cli};
use wordle_sieve::{engine, logging, parser, wordbank, SolveError};

/// How many remaining candidates to print before truncating the report.
const PREVIEW_LIMIT: usize = 100;

fn main() -> ExitCode {
    let cli = cli::parse_cli();
    logging::init(cli.log_level);
    info!("Solving wordle game of {} characters", cli.length);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(SolveError::Validation(e)) => {
            eprintln!("{e}\n");
            let _ = Cli::command().print_help();
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SolveError> {
    let guesses = parser::parse_guesses(&cli.guesses, cli.length)?;
    let words = wordbank::load_words_from_file(&cli.wordlist, cli.length).map_err(|source| {
        SolveError::WordList {
            path: cli.wordlist.clone(),
            source,
        }
    })?;
    info!("Loaded {} words of length {}", words.len(), cli.length);

    let remaining = engine::solve(cli.length, &guesses, words);

    println!("Remaining candidates ({}):", remaining.len());
    for word in remaining.iter().take(PREVIEW_LIMIT) {
        println!("{word}");
    }
    if remaining.len() > PREVIEW_LIMIT {
        println!("...and {} more", remaining.len() - PREVIEW_LIMIT);
    }
    Ok(())
}
