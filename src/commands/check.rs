//! Word check command
//!
//! Validates a word against a level without touching stored progress.

use crate::catalog::Catalog;
use crate::core::Word;
use crate::engine::{Engine, Outcome, ProgressState};
use std::collections::BTreeMap;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub level_index: usize,
    pub level_name: String,
    pub source_word: String,
    pub outcome: Outcome,
    /// First letter the level cannot supply, for `InvalidLetters`
    pub missing_letter: Option<char>,
}

impl CheckResult {
    /// The word would be accepted on a fresh level
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted(_))
    }
}

/// Check `word` against level `level_index`
///
/// # Errors
///
/// Returns an error if the level index is out of range.
pub fn check_word(catalog: &Catalog, level_index: usize, word: &str) -> Result<CheckResult, String> {
    let level = catalog.get(level_index).ok_or_else(|| {
        format!(
            "Level {} does not exist (there are {})",
            level_index + 1,
            catalog.len()
        )
    })?;

    let engine = Engine::new(catalog);
    let probe = ProgressState::from_parts(level_index, BTreeMap::new());
    let outcome = engine.submit_word(probe, word).outcome;

    let parsed = Word::parse(word);
    let missing_letter = parsed
        .as_ref()
        .and_then(|w| level.letters().first_unavailable(w));

    Ok(CheckResult {
        word: parsed.map_or_else(String::new, Word::into_text),
        level_index,
        level_name: level.name().to_string(),
        source_word: level.source_word(),
        outcome,
        missing_letter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog;

    #[test]
    fn valid_word() {
        let catalog = load_catalog();
        let result = check_word(&catalog, 0, "Кино").unwrap();

        assert!(result.is_valid());
        assert_eq!(result.word, "кино");
        assert_eq!(result.source_word, "КОРЗИНА");
        assert!(result.missing_letter.is_none());
    }

    #[test]
    fn missing_letter_reported() {
        let catalog = load_catalog();
        let result = check_word(&catalog, 0, "торт").unwrap();

        assert_eq!(result.outcome, Outcome::InvalidLetters);
        assert_eq!(result.missing_letter, Some('т'));
    }

    #[test]
    fn other_level() {
        let catalog = load_catalog();
        let result = check_word(&catalog, 1, "паровоз").unwrap();
        assert!(result.is_valid());

        let result = check_word(&catalog, 1, "кино").unwrap();
        assert_eq!(result.outcome, Outcome::InvalidLetters);
    }

    #[test]
    fn not_in_dictionary() {
        let catalog = load_catalog();
        let result = check_word(&catalog, 0, "корн").unwrap();
        assert_eq!(result.outcome, Outcome::NotInDictionary);
    }

    #[test]
    fn empty_word_is_noop() {
        let catalog = load_catalog();
        let result = check_word(&catalog, 0, "  ").unwrap();
        assert_eq!(result.outcome, Outcome::NoOp);
        assert!(!result.is_valid());
    }

    #[test]
    fn bad_level_index() {
        let catalog = load_catalog();
        assert!(check_word(&catalog, 3, "кино").is_err());
    }
}
