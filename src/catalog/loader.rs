//! Word list loading utilities
//!
//! Dictionaries come either from files (one word per line) or from the embedded
//! constants. Entries are canonicalized the same way player input is.

use crate::core::canonicalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns canonical words, skipping blank lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_from_word::catalog::loader::load_from_file;
///
/// let words = load_from_file("data/level1.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Load a level dictionary, tolerating a missing or unreadable source
///
/// A source that cannot be read yields an empty dictionary and a warning.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(words) => {
            tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
            words
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "word list not found, level dictionary is empty");
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "word list unreadable, level dictionary is empty");
            Vec::new()
        }
    }
}

/// Convert an embedded string slice to canonical words
///
/// # Examples
/// ```
/// use word_from_word::catalog::loader::words_from_slice;
///
/// let words = words_from_slice(&["Кино", "", "ЗОНА"]);
/// assert_eq!(words, vec!["кино", "зона"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(canonicalize)
        .filter(|word| !word.is_empty())
        .collect()
}
