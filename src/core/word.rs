//! Candidate word representation
//!
//! A Word is player input (or a dictionary entry) after canonicalization.

use super::letters::canonicalize;
use std::fmt;

/// A canonical, non-empty candidate word
///
/// Stores the folded text and its characters in order, so letter-availability
/// checks can walk the word left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Create a Word from raw input
    ///
    /// Trims, lowercases and folds `ё` to `е`. Returns `None` when nothing is left,
    /// which is how an empty submission is recognised.
    ///
    /// # Examples
    /// ```
    /// use word_from_word::core::Word;
    ///
    /// let word = Word::parse("  КИНО ").unwrap();
    /// assert_eq!(word.text(), "кино");
    ///
    /// assert!(Word::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let text = canonicalize(input);
        if text.is_empty() {
            return None;
        }

        let chars = text.chars().collect();
        Some(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters of the word in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false, a Word is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Consume the word, returning its canonical text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let word = Word::parse("кино").unwrap();
        assert_eq!(word.text(), "кино");
        assert_eq!(word.chars(), &['к', 'и', 'н', 'о']);
    }

    #[test]
    fn parse_uppercase_normalized() {
        let word = Word::parse("КИНО").unwrap();
        assert_eq!(word.text(), "кино");

        let word2 = Word::parse("КиНо").unwrap();
        assert_eq!(word2.text(), "кино");
    }

    #[test]
    fn parse_folds_yo() {
        let word = Word::parse("ёлка").unwrap();
        assert_eq!(word.text(), "елка");
        assert_eq!(word, Word::parse("елка").unwrap());
    }

    #[test]
    fn parse_empty_is_none() {
        assert!(Word::parse("").is_none());
        assert!(Word::parse("  \t ").is_none());
    }

    #[test]
    fn len_counts_chars_not_bytes() {
        let word = Word::parse("зона").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.text().len(), 8);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_display() {
        let word = Word::parse("Роза").unwrap();
        assert_eq!(format!("{word}"), "роза");
    }
}
