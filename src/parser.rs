use std::fmt;
use thiserror::Error;

/// Per-letter qualifier attached to a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Letter is present at this position ('.')
    Correct,
    /// Letter is not present ('-')
    Absent,
    /// Letter is present, but not at this position ('?')
    Elsewhere,
}

impl Feedback {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Feedback::Correct),
            '-' => Some(Feedback::Absent),
            '?' => Some(Feedback::Elsewhere),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '.',
            Feedback::Absent => '-',
            Feedback::Elsewhere => '?',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("guess '{token}' is not formatted properly: it should have {expected} characters")]
    LengthMismatch { token: String, expected: usize },
    #[error("guess '{token}' does not contain a proper word")]
    InvalidWord { token: String },
    #[error("guess '{token}' has invalid qualifier characters")]
    InvalidQualifier { token: String },
}

/// A validated guess: a lowercase word and one feedback code per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: String,
    codes: Vec<Feedback>,
}

impl Guess {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn codes(&self) -> &[Feedback] {
        &self.codes
    }

    /// Letters paired with their feedback codes, in position order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Feedback)> + '_ {
        self.word.bytes().zip(self.codes.iter().copied())
    }

    /// How many positions in this guess carry `letter` with a non-ABSENT code.
    pub fn confirmed_count(&self, letter: u8) -> usize {
        self.iter()
            .filter(|&(l, code)| l == letter && code != Feedback::Absent)
            .count()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, code) in self.iter() {
            write!(f, "{}{}", letter as char, code.to_char())?;
        }
        Ok(())
    }
}

/// Decodes one raw token of interleaved letter/qualifier pairs.
///
/// Validation order: token length, then word letters, then qualifiers.
pub fn parse_guess(token: &str, length: usize) -> Result<Guess, ParseError> {
    let bytes = token.as_bytes();
    if bytes.len() != length * 2 {
        return Err(ParseError::LengthMismatch {
            token: token.to_string(),
            expected: length * 2,
        });
    }

    let letters: Vec<u8> = bytes.iter().copied().step_by(2).collect();
    if !letters.iter().all(u8::is_ascii_alphabetic) {
        return Err(ParseError::InvalidWord {
            token: token.to_string(),
        });
    }

    let codes: Vec<Feedback> = bytes
        .iter()
        .skip(1)
        .step_by(2)
        .map(|&b| Feedback::from_char(b as char))
        .collect::<Option<_>>()
        .ok_or_else(|| ParseError::InvalidQualifier {
            token: token.to_string(),
        })?;

    let word: String = letters
        .iter()
        .map(|b| b.to_ascii_lowercase() as char)
        .collect();
    Ok(Guess { word, codes })
}

/// Decodes all tokens, preserving input order. Fails on the first bad token.
pub fn parse_guesses(tokens: &[String], length: usize) -> Result<Vec<Guess>, ParseError> {
    tokens.iter().map(|t| parse_guess(t, length)).collect()
}
