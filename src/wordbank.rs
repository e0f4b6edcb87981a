use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Streams words of exactly `length` lowercase ASCII letters, in file order.
/// Duplicates are passed through untouched.
pub fn words_of_length<R: Read>(reader: R, length: usize) -> io::Result<Vec<String>> {
    let reader = BufReader::new(reader);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_ascii_lowercase();
        if word.len() == length && word.bytes().all(|b| b.is_ascii_alphabetic()) {
            words.push(word);
        }
    }
    Ok(words)
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    words_of_length(File::open(path)?, length)
}

pub fn load_words_from_str(data: &str, length: usize) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| word.len() == length && word.bytes().all(|b| b.is_ascii_alphabetic()))
        .collect()
}
