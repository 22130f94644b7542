//! Letter multiset for a level
//!
//! A LetterBag remembers the letters in their original order (for display) and
//! a count per letter (for availability checks).

use super::letters::canonical_char;
use super::word::Word;
use rustc_hash::FxHashMap;

/// The multiset of letters a level provides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    letters: Vec<char>,
    counts: FxHashMap<char, usize>,
}

impl LetterBag {
    /// Build a bag from letters, canonicalizing each one
    ///
    /// # Examples
    /// ```
    /// use word_from_word::core::LetterBag;
    ///
    /// let bag = LetterBag::new("ПАРОВОЗ".chars());
    /// assert_eq!(bag.count('о'), 2);
    /// assert_eq!(bag.len(), 7);
    /// ```
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        let letters: Vec<char> = letters
            .into_iter()
            .filter(|c| !c.is_whitespace())
            .map(canonical_char)
            .collect();

        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for &letter in &letters {
            *counts.entry(letter).or_insert(0) += 1;
        }

        Self { letters, counts }
    }

    /// Letters in the order the level lists them
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// How many times a letter occurs (after canonicalization)
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts
            .get(&canonical_char(letter))
            .copied()
            .unwrap_or(0)
    }

    /// Check that `word` can be spelled with this bag
    ///
    /// Consumes one occurrence per character, left to right, and stops at the
    /// first character with nothing left.
    #[must_use]
    pub fn can_form(&self, word: &Word) -> bool {
        self.first_unavailable(word).is_none()
    }

    /// The first character of `word` that the bag cannot supply, if any
    #[must_use]
    pub fn first_unavailable(&self, word: &Word) -> Option<char> {
        let mut remaining = self.counts.clone();
        for &ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(left) if *left > 0 => *left -= 1,
                _ => return Some(ch),
            }
        }
        None
    }

    /// The letters joined and upper-cased, as shown to the player
    #[must_use]
    pub fn display_upper(&self) -> String {
        self.letters.iter().collect::<String>().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn korzina() -> LetterBag {
        LetterBag::new(['к', 'о', 'р', 'з', 'и', 'н', 'а'])
    }

    #[test]
    fn forms_word_from_available_letters() {
        let bag = korzina();
        assert!(bag.can_form(&Word::parse("кино").unwrap()));
        assert!(bag.can_form(&Word::parse("зона").unwrap()));
        assert!(bag.can_form(&Word::parse("корзина").unwrap()));
    }

    #[test]
    fn rejects_missing_letter() {
        let bag = korzina();
        let word = Word::parse("торт").unwrap();
        assert!(!bag.can_form(&word));
        assert_eq!(bag.first_unavailable(&word), Some('т'));
    }

    #[test]
    fn rejects_overused_letter() {
        let bag = korzina();
        // Only one 'о' available
        let word = Word::parse("окно").unwrap();
        assert!(!bag.can_form(&word));
        assert_eq!(bag.first_unavailable(&word), Some('о'));
    }

    #[test]
    fn duplicate_letters_usable_up_to_count() {
        let bag = LetterBag::new("паровоз".chars());
        assert_eq!(bag.count('о'), 2);
        assert!(bag.can_form(&Word::parse("опора").unwrap()));
        assert!(!bag.can_form(&Word::parse("ооо").unwrap()));
    }

    #[test]
    fn yo_and_ye_interchangeable() {
        let bag = LetterBag::new("ёж".chars());
        assert_eq!(bag.count('е'), 1);
        assert_eq!(bag.count('ё'), 1);
        assert!(bag.can_form(&Word::parse("еж").unwrap()));
        assert!(bag.can_form(&Word::parse("ёж").unwrap()));
    }

    #[test]
    fn uppercase_letters_canonicalized() {
        let bag = LetterBag::new("КАРТИНА".chars());
        assert_eq!(bag.letters(), &['к', 'а', 'р', 'т', 'и', 'н', 'а']);
        assert_eq!(bag.count('а'), 2);
        assert_eq!(bag.display_upper(), "КАРТИНА");
    }

    #[test]
    fn empty_bag_forms_nothing() {
        let bag = LetterBag::new(std::iter::empty());
        assert!(bag.is_empty());
        assert!(!bag.can_form(&Word::parse("а").unwrap()));
    }
}
