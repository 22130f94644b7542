//! Progress store
//!
//! Text format:
//!
//! ```text
//! current_level:1
//! guessed_words:
//! 0:кино,зона
//! 1:пар
//! ```

use super::error::PersistenceError;
use crate::core::canonicalize;
use crate::engine::ProgressState;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CURRENT_LEVEL_KEY: &str = "current_level";
const GUESSED_WORDS_HEADER: &str = "guessed_words:";

/// Characters the text format uses as separators; stored words must not contain them
pub const SEPARATORS: [char; 2] = [':', ','];

/// Where progress lives between sessions
///
/// Every save overwrites the whole record. A missing record means no progress.
pub trait ProgressStore {
    /// Read stored progress, `Ok(None)` when nothing is stored
    ///
    /// # Errors
    /// Returns `PersistenceError` if the record exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<ProgressState>, PersistenceError>;

    /// Overwrite stored progress
    ///
    /// # Errors
    /// Returns `PersistenceError::Write` if the record cannot be written.
    fn save(&mut self, state: &ProgressState) -> Result<(), PersistenceError>;

    /// Delete stored progress entirely
    ///
    /// # Errors
    /// Returns `PersistenceError::Remove` if an existing record cannot be removed.
    fn reset(&mut self) -> Result<(), PersistenceError>;
}

/// Render progress in the store's text format
#[must_use]
pub fn render(state: &ProgressState) -> String {
    let mut out = format!(
        "{CURRENT_LEVEL_KEY}:{}\n{GUESSED_WORDS_HEADER}\n",
        state.current_level()
    );
    for (level, words) in state.guessed_by_level() {
        out.push_str(&format!("{level}:{}\n", words.join(",")));
    }
    out
}

/// Parse progress from the store's text format
///
/// Unknown lines are ignored. Words are canonicalized and blanks dropped.
///
/// # Errors
/// Returns `PersistenceError::Malformed` when a level index is not a number.
pub fn parse(text: &str) -> Result<ProgressState, PersistenceError> {
    let mut current_level = 0;
    let mut guessed: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut reading_words = false;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_no = i + 1;

        if line.is_empty() {
            continue;
        }

        if line == GUESSED_WORDS_HEADER {
            reading_words = true;
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            tracing::debug!(line = line_no, "ignoring unrecognised save line");
            continue;
        };

        if key.trim() == CURRENT_LEVEL_KEY {
            current_level = parse_index(value, line_no)?;
        } else if reading_words {
            let level = parse_index(key, line_no)?;
            let words = value
                .split(',')
                .map(canonicalize)
                .filter(|w| !w.is_empty())
                .collect();
            guessed.insert(level, words);
        } else {
            tracing::debug!(line = line_no, "ignoring unrecognised save line");
        }
    }

    Ok(ProgressState::from_parts(current_level, guessed))
}

fn parse_index(value: &str, line: usize) -> Result<usize, PersistenceError> {
    value
        .trim()
        .parse()
        .map_err(|e| PersistenceError::Malformed {
            line,
            reason: format!("invalid level index '{}': {e}", value.trim()),
        })
}

/// Progress stored in a text file
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self) -> Result<Option<ProgressState>, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        parse(&text).map(Some)
    }

    fn save(&mut self, state: &ProgressState) -> Result<(), PersistenceError> {
        fs::write(&self.path, render(state)).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "progress saved");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "progress removed");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistenceError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// Progress kept in memory, in the same text format as the file store
///
/// Useful where no disk is wanted; `read_only` makes every write fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    text: Option<String>,
    read_only: bool,
}

impl MemoryProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding raw text, as if read from disk
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            read_only: false,
        }
    }

    /// A store that rejects every save and reset
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// The raw stored text, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only")
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> Result<Option<ProgressState>, PersistenceError> {
        self.text.as_deref().map(parse).transpose()
    }

    fn save(&mut self, state: &ProgressState) -> Result<(), PersistenceError> {
        if self.read_only {
            return Err(PersistenceError::Write {
                path: PathBuf::from("<memory>"),
                source: Self::denied(),
            });
        }
        self.text = Some(render(state));
        Ok(())
    }

    fn reset(&mut self) -> Result<(), PersistenceError> {
        if self.read_only {
            return Err(PersistenceError::Remove {
                path: PathBuf::from("<memory>"),
                source: Self::denied(),
            });
        }
        self.text = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> ProgressState {
        let mut guessed = BTreeMap::new();
        guessed.insert(0, vec!["кино".to_string(), "зона".to_string()]);
        guessed.insert(1, vec!["пар".to_string()]);
        ProgressState::from_parts(1, guessed)
    }

    #[test]
    fn render_format() {
        let text = render(&sample_state());
        assert_eq!(
            text,
            "current_level:1\nguessed_words:\n0:кино,зона\n1:пар\n"
        );
    }

    #[test]
    fn render_then_parse_reproduces_state() {
        let state = sample_state();
        assert_eq!(parse(&render(&state)).unwrap(), state);

        let empty = ProgressState::new();
        assert_eq!(parse(&render(&empty)).unwrap(), empty);
    }

    #[test]
    fn empty_word_list_survives() {
        let mut guessed = BTreeMap::new();
        guessed.insert(2, Vec::new());
        let state = ProgressState::from_parts(2, guessed);

        let parsed = parse(&render(&state)).unwrap();
        assert_eq!(parsed, state);
        assert_eq!(parsed.guessed_by_level().get(&2), Some(&Vec::new()));
    }

    #[test]
    fn parse_tolerates_whitespace_and_crlf() {
        let text = "current_level: 2 \r\n\r\nguessed_words:\r\n 0 : кино , зона \r\n";
        let state = parse(text).unwrap();
        assert_eq!(state.current_level(), 2);
        assert_eq!(state.guessed(0), &["кино", "зона"]);
    }

    #[test]
    fn parse_ignores_unknown_lines() {
        let text = "hello\ncurrent_level:1\nextra:thing\nguessed_words:\n0:кино\n";
        let state = parse(text).unwrap();
        assert_eq!(state.current_level(), 1);
        assert_eq!(state.guessed(0), &["кино"]);
    }

    #[test]
    fn parse_word_lines_need_header() {
        let state = parse("current_level:0\n0:кино\n").unwrap();
        assert!(state.guessed_by_level().is_empty());
    }

    #[test]
    fn parse_bad_level_is_malformed() {
        let err = parse("current_level:abc\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 1, .. }));

        let err = parse("current_level:0\nguessed_words:\nx:кино\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 3, .. }));
    }

    #[test]
    fn file_store_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path().join("game_save.txt"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileProgressStore::new(dir.path().join("game_save.txt"));
        let state = sample_state();

        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn file_store_reset_removes_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileProgressStore::new(dir.path().join("game_save.txt"));

        store.save(&sample_state()).unwrap();
        store.reset().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_none());

        store.reset().unwrap();
    }

    #[test]
    fn file_store_write_fault() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileProgressStore::new(dir.path().join("missing_dir").join("save.txt"));

        let err = store.save(&sample_state()).unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
    }

    #[test]
    fn file_store_read_fault_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());

        let err = store.load().unwrap_err();
        assert!(matches!(err, PersistenceError::Read { .. }));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryProgressStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&sample_state()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample_state()));

        store.reset().unwrap();
        assert!(store.text().is_none());
    }

    #[test]
    fn memory_store_read_only_rejects_writes() {
        let mut store = MemoryProgressStore::new().read_only();
        assert!(store.save(&sample_state()).is_err());
        assert!(store.reset().is_err());
    }
}
