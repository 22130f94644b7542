//! Level catalog
//!
//! The fixed, ordered list of levels. Dictionaries are embedded at build time,
//! or read from a directory of word lists when one is configured.

mod embedded;
pub mod loader;

pub use embedded::{LEVEL_1_WORDS, LEVEL_2_WORDS, LEVEL_3_WORDS};

use crate::core::{LetterBag, Word};
use crate::storage::progress::SEPARATORS;
use rustc_hash::FxHashSet;
use std::path::Path;

/// A single level: letters to build from, accepted words, and the advance threshold
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    letters: LetterBag,
    dictionary: FxHashSet<String>,
    required: usize,
}

impl Level {
    /// Build a level, canonicalizing letters and dictionary entries
    ///
    /// A `required` of 0 is raised to 1. Entries containing a progress-file
    /// separator (`:` or `,`) are dropped, since a guessed word must survive a save.
    pub fn new<I, S>(name: impl Into<String>, letters: &str, words: I, required: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let dictionary = words
            .into_iter()
            .filter_map(|w| Word::parse(w.as_ref()))
            .filter(|w| {
                let storable = !w.text().contains(SEPARATORS);
                if !storable {
                    tracing::warn!(level = %name, word = %w, "skipping dictionary entry with a separator character");
                }
                storable
            })
            .map(Word::into_text)
            .collect();

        Self {
            name,
            letters: LetterBag::new(letters.chars()),
            dictionary,
            required: required.max(1),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterBag {
        &self.letters
    }

    /// Number of guessed words needed before moving on
    #[must_use]
    pub const fn required(&self) -> usize {
        self.required
    }

    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Check whether a canonical word is in this level's dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary.contains(word.text())
    }

    /// The source word as shown to the player (letters joined, upper-cased)
    #[must_use]
    pub fn source_word(&self) -> String {
        self.letters.display_upper()
    }
}

/// Ordered, index-addressed sequence of levels, fixed at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Level>,
}

impl Catalog {
    /// Create a catalog from levels
    ///
    /// Returns `None` for an empty list, since the game needs at least one level.
    #[must_use]
    pub fn new(levels: Vec<Level>) -> Option<Self> {
        if levels.is_empty() {
            None
        } else {
            Some(Self { levels })
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false, a catalog holds at least one level
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.levels.len() - 1
    }

    /// Level at `index`, or the last level when `index` is past the end
    #[must_use]
    pub fn level_or_last(&self, index: usize) -> &Level {
        &self.levels[index.min(self.last_index())]
    }

    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index == self.last_index()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

/// Static description of a built-in level
struct LevelDef {
    name: &'static str,
    letters: &'static str,
    file_name: &'static str,
    embedded: &'static [&'static str],
    required: usize,
}

const BUILTIN_LEVELS: [LevelDef; 3] = [
    LevelDef {
        name: "Level 1",
        letters: "корзина",
        file_name: "level1.txt",
        embedded: LEVEL_1_WORDS,
        required: 5,
    },
    LevelDef {
        name: "Level 2",
        letters: "паровоз",
        file_name: "level2.txt",
        embedded: LEVEL_2_WORDS,
        required: 5,
    },
    LevelDef {
        name: "Level 3",
        letters: "картина",
        file_name: "level3.txt",
        embedded: LEVEL_3_WORDS,
        required: 5,
    },
];

/// Load the built-in catalog with embedded dictionaries
#[must_use]
pub fn load_catalog() -> Catalog {
    let levels = BUILTIN_LEVELS
        .iter()
        .map(|def| Level::new(def.name, def.letters, def.embedded, def.required))
        .collect();
    Catalog { levels }
}

/// Load the built-in levels, reading each dictionary from `dir`
///
/// A missing word list gives that level an empty dictionary.
pub fn load_catalog_from_dir<P: AsRef<Path>>(dir: P) -> Catalog {
    let dir = dir.as_ref();
    let levels = BUILTIN_LEVELS
        .iter()
        .map(|def| {
            let words = loader::load_dictionary(dir.join(def.file_name));
            Level::new(def.name, def.letters, words, def.required)
        })
        .collect();
    Catalog { levels }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_levels() {
        let catalog = load_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.last_index(), 2);
        assert!(catalog.is_last(2));
        assert!(!catalog.is_last(0));
    }

    #[test]
    fn builtin_levels_have_words_and_threshold() {
        let catalog = load_catalog();
        for level in catalog.iter() {
            assert!(level.dictionary_len() >= level.required());
            assert_eq!(level.required(), 5);
        }
    }

    #[test]
    fn builtin_source_words() {
        let catalog = load_catalog();
        let sources: Vec<String> = catalog.iter().map(Level::source_word).collect();
        assert_eq!(sources, vec!["КОРЗИНА", "ПАРОВОЗ", "КАРТИНА"]);
    }

    #[test]
    fn embedded_words_formable_from_their_level() {
        let catalog = load_catalog();
        let lists: [&[&str]; 3] = [LEVEL_1_WORDS, LEVEL_2_WORDS, LEVEL_3_WORDS];

        for (level, list) in catalog.iter().zip(lists) {
            for &entry in list {
                let word = Word::parse(entry).unwrap();
                assert!(
                    level.letters().can_form(&word),
                    "'{entry}' cannot be formed from {}",
                    level.source_word()
                );
                assert!(level.contains(&word));
            }
        }
    }

    #[test]
    fn level_dictionary_canonicalized() {
        let level = Level::new("t", "ёлка", ["ЁЛКА", "лак"], 1);
        assert!(level.contains(&Word::parse("елка").unwrap()));
        assert!(level.contains(&Word::parse("ёлка").unwrap()));
        assert!(level.contains(&Word::parse("ЛАК").unwrap()));
    }

    #[test]
    fn level_required_at_least_one() {
        let level = Level::new("t", "аб", ["ба"], 0);
        assert_eq!(level.required(), 1);
    }

    #[test]
    fn separator_entries_dropped() {
        let level = Level::new("t", "аб,:", ["аб", "а,б", "б:а"], 1);
        assert_eq!(level.dictionary_len(), 1);
        assert!(level.contains(&Word::parse("аб").unwrap()));
        assert!(!level.contains(&Word::parse("а,б").unwrap()));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(Catalog::new(Vec::new()).is_none());
    }

    #[test]
    fn catalog_from_dir_reads_files_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("level1.txt"), "кино\nзона\n").unwrap();

        let catalog = load_catalog_from_dir(dir.path());
        assert_eq!(catalog.len(), 3);

        let first = catalog.get(0).unwrap();
        assert_eq!(first.dictionary_len(), 2);
        assert!(first.contains(&Word::parse("кино").unwrap()));

        assert_eq!(catalog.get(1).unwrap().dictionary_len(), 0);
        assert_eq!(catalog.get(2).unwrap().dictionary_len(), 0);
    }
}
