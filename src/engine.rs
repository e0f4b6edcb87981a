use crate::parser::{Feedback, Guess};
use log::debug;
use std::fmt;

pub const ALPHABET_LEN: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

fn index(letter: u8) -> usize {
    (letter.to_ascii_lowercase() - b'a') as usize
}

/// Set of letters still allowed at one word position, as a bitmask over a-z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn full() -> Self {
        LetterSet(FULL_MASK)
    }

    pub fn pinned(letter: u8) -> Self {
        LetterSet(1 << index(letter))
    }

    pub fn contains(self, letter: u8) -> bool {
        self.0 & (1 << index(letter)) != 0
    }

    pub fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << index(letter));
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in b'a'..=b'z' {
            if self.contains(letter) {
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}

/// Accumulates constraints from a sequence of guesses and filters candidates.
///
/// Position sets only ever shrink, and a letter's max-occurrence bound only
/// ever tightens. Contradictory guesses are not an error; they leave the
/// candidate set empty.
pub struct Engine {
    length: usize,
    positions: Vec<LetterSet>,
    max_occurrences: [usize; ALPHABET_LEN],
}

impl Engine {
    pub fn new(length: usize) -> Self {
        Engine {
            length,
            positions: vec![LetterSet::full(); length],
            max_occurrences: [length; ALPHABET_LEN],
        }
    }

    /// Folds one guess into the accumulated state, then filters `candidates`
    /// down to the words still consistent with everything seen so far.
    pub fn apply(&mut self, guess: &Guess, candidates: Vec<String>) -> Vec<String> {
        debug!("folding guess {guess}");

        // Lower bounds gathered from this guess only; reset each call.
        let mut required = [0usize; ALPHABET_LEN];

        for (i, (letter, code)) in guess.iter().enumerate() {
            match code {
                Feedback::Correct => {
                    required[index(letter)] += 1;
                    // A position pinned by an earlier guess stays pinned.
                    if self.positions[i].len() != 1 {
                        self.positions[i] = LetterSet::pinned(letter);
                    }
                }
                Feedback::Elsewhere => {
                    required[index(letter)] += 1;
                    self.positions[i].remove(letter);
                }
                Feedback::Absent => {
                    let confirmed = guess.confirmed_count(letter);
                    let max = &mut self.max_occurrences[index(letter)];
                    if confirmed < *max {
                        *max = confirmed;
                    }
                    debug!("max occurrences of {} is {}", letter as char, *max);
                    if *max == 0 {
                        for set in &mut self.positions {
                            if set.len() != 1 {
                                set.remove(letter);
                            }
                        }
                    }
                    self.positions[i].remove(letter);
                }
            }
        }

        for (i, set) in self.positions.iter().enumerate() {
            debug!("allowed letters at {i}: {set}");
        }

        let mut remaining: Vec<String> = candidates
            .into_iter()
            .filter(|word| self.matches_positions(word))
            .collect();
        debug!("candidates after position filter: {}", remaining.len());

        for letter in b'a'..=b'z' {
            let min = required[index(letter)];
            if min == 0 {
                continue;
            }
            let max = self.max_occurrences[index(letter)];
            remaining.retain(|word| {
                let count = word.bytes().filter(|&b| b == letter).count();
                if min == max {
                    count == min
                } else {
                    count >= min
                }
            });
            debug!(
                "candidates after count filter on {}: {}",
                letter as char,
                remaining.len()
            );
        }

        remaining
    }

    fn matches_positions(&self, word: &str) -> bool {
        word.len() == self.length
            && word
                .bytes()
                .zip(self.positions.iter())
                .all(|(letter, set)| set.contains(letter))
    }
}

/// Folds all guesses in order over the word list and returns the remainder.
pub fn solve(length: usize, guesses: &[Guess], words: Vec<String>) -> Vec<String> {
    let mut engine = Engine::new(length);
    let mut candidates = words;
    for guess in guesses {
        candidates = engine.apply(guess, candidates);
    }
    candidates
}
