// Integration tests for the wordle-sieve crate
// These exercise the public API the way the binary does: load a word list,
// parse guess tokens, and fold them through the constraint engine.

use wordle_sieve::{load_words_from_str, parse_guesses, solve, Engine, ParseError};

const WORDS: &str = "crane\ntrace\ngrace\nbrace\nspace\nplace\nstale\ncat\nstones";

fn five_letter_words() -> Vec<String> {
    load_words_from_str(WORDS, 5)
}

#[test]
fn test_empty_guess_list_returns_whole_dictionary() {
    let words = five_letter_words();
    let guesses = parse_guesses(&[], 5).unwrap();
    let remaining = solve(5, &guesses, words.clone());
    assert_eq!(remaining, words);
}

#[test]
fn test_narrowing_toward_a_target() {
    // Target is "grace"; tokens are the feedback a real game would give.
    let words = five_letter_words();

    let tokens = vec!["c?r.a.n-e.".to_string()];
    let guesses = parse_guesses(&tokens, 5).unwrap();
    let remaining = solve(5, &guesses, words);
    assert_eq!(remaining, vec!["trace", "grace", "brace"]);

    let tokens = vec!["c?r.a.n-e.".to_string(), "t-r.a.c.e.".to_string()];
    let guesses = parse_guesses(&tokens, 5).unwrap();
    let remaining = solve(5, &guesses, five_letter_words());
    assert_eq!(remaining, vec!["grace", "brace"]);

    let tokens = vec![
        "c?r.a.n-e.".to_string(),
        "t-r.a.c.e.".to_string(),
        "b-r.a.c.e.".to_string(),
    ];
    let guesses = parse_guesses(&tokens, 5).unwrap();
    let remaining = solve(5, &guesses, five_letter_words());
    assert_eq!(remaining, vec!["grace"]);
}

#[test]
fn test_candidate_count_never_grows() {
    let words = five_letter_words();
    let tokens = vec![
        "s-t-a.l-e.".to_string(),
        "c?r.a.n-e.".to_string(),
        "t-r.a.c.e.".to_string(),
    ];
    let guesses = parse_guesses(&tokens, 5).unwrap();

    let mut engine = Engine::new(5);
    let mut candidates = words;
    for guess in &guesses {
        let before = candidates.len();
        candidates = engine.apply(guess, candidates);
        assert!(candidates.len() <= before);
    }
}

#[test]
fn test_all_correct_guess_pins_the_target() {
    let words = five_letter_words();
    let guesses = parse_guesses(&["g.r.a.c.e.".to_string()], 5).unwrap();
    let remaining = solve(5, &guesses, words);
    assert_eq!(remaining, vec!["grace"]);
}

#[test]
fn test_all_correct_guess_absent_from_dictionary() {
    let words = five_letter_words();
    let guesses = parse_guesses(&["q.u.a.r.k.".to_string()], 5).unwrap();
    let remaining = solve(5, &guesses, words);
    assert!(remaining.is_empty());
}

#[test]
fn test_contradictory_guesses_yield_empty_set_not_error() {
    let words = five_letter_words();
    let tokens = vec!["g-r-a-c-e-".to_string(), "g.r.a.c.e.".to_string()];
    let guesses = parse_guesses(&tokens, 5).unwrap();
    let remaining = solve(5, &guesses, words);
    assert!(remaining.is_empty());
}

#[test]
fn test_bad_token_aborts_before_any_filtering() {
    // One malformed token among valid ones fails the whole parse,
    // so no partial narrowing can be observed.
    let tokens = vec!["c?r.a.n-e.".to_string(), "ab".to_string()];
    let err = parse_guesses(&tokens, 5).unwrap_err();
    assert_eq!(
        err,
        ParseError::LengthMismatch {
            token: "ab".to_string(),
            expected: 10,
        }
    );
}

#[test]
fn test_non_default_word_length() {
    let words = load_words_from_str("cat\ndog\ncot\ncrane", 3);
    assert_eq!(words, vec!["cat", "dog", "cot"]);

    let guesses = parse_guesses(&["c.a-t.".to_string()], 3).unwrap();
    let remaining = solve(3, &guesses, words);
    assert_eq!(remaining, vec!["cot"]);
}
