//! Settings store
//!
//! Three keys, one per line: `background_index`, `music_enabled`, `sounds_enabled`.
//! Each key has its own parser and default; anything unreadable falls back.

use super::error::PersistenceError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of selectable backgrounds
pub const BACKGROUND_COUNT: usize = 4;

const BACKGROUND_KEY: &str = "background_index";
const MUSIC_KEY: &str = "music_enabled";
const SOUNDS_KEY: &str = "sounds_enabled";

/// Player preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub background_index: usize,
    pub music_enabled: bool,
    pub sounds_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_index: 0,
            music_enabled: true,
            sounds_enabled: true,
        }
    }
}

impl Settings {
    /// Parse settings text, one key at a time
    ///
    /// Unknown keys and malformed lines are skipped; an out-of-range background
    /// index leaves the default selection.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();

        for line in text.lines() {
            let Some((key, value)) = line.trim().split_once(':') else {
                continue;
            };
            let value = value.trim();

            match key.trim() {
                BACKGROUND_KEY => {
                    if let Some(index) = parse_background(value) {
                        settings.background_index = index;
                    }
                }
                MUSIC_KEY => {
                    if let Some(flag) = parse_flag(value) {
                        settings.music_enabled = flag;
                    }
                }
                SOUNDS_KEY => {
                    if let Some(flag) = parse_flag(value) {
                        settings.sounds_enabled = flag;
                    }
                }
                other => tracing::debug!(key = other, "ignoring unknown setting"),
            }
        }

        settings
    }

    /// Render in the store's text format
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{BACKGROUND_KEY}:{}\n{MUSIC_KEY}:{}\n{SOUNDS_KEY}:{}\n",
            self.background_index, self.music_enabled, self.sounds_enabled
        )
    }

    pub fn next_background(&mut self) {
        self.background_index = (self.background_index + 1) % BACKGROUND_COUNT;
    }

    pub fn previous_background(&mut self) {
        self.background_index = (self.background_index + BACKGROUND_COUNT - 1) % BACKGROUND_COUNT;
    }

    /// Flip the music flag, returning the new value
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    /// Flip the sounds flag, returning the new value
    pub fn toggle_sounds(&mut self) -> bool {
        self.sounds_enabled = !self.sounds_enabled;
        self.sounds_enabled
    }
}

fn parse_background(value: &str) -> Option<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|&index| index < BACKGROUND_COUNT)
}

// Accepts the legacy capitalised spelling as well
fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Settings stored in a text file
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults if the file is missing or unreadable
    #[must_use]
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(text) => Settings::parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "settings unreadable, using defaults");
                Settings::default()
            }
        }
    }

    /// Overwrite the settings file
    ///
    /// # Errors
    /// Returns `PersistenceError::Write` if the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<(), PersistenceError> {
        fs::write(&self.path, settings.render()).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.background_index, 0);
        assert!(settings.music_enabled);
        assert!(settings.sounds_enabled);
    }

    #[test]
    fn parse_all_keys() {
        let settings = Settings::parse("background_index:2\nmusic_enabled:false\nsounds_enabled:true\n");
        assert_eq!(
            settings,
            Settings {
                background_index: 2,
                music_enabled: false,
                sounds_enabled: true,
            }
        );
    }

    #[test]
    fn parse_legacy_capitalised_flags() {
        let settings = Settings::parse("music_enabled:False\nsounds_enabled:FALSE\n");
        assert!(!settings.music_enabled);
        assert!(!settings.sounds_enabled);
    }

    #[test]
    fn malformed_entries_fall_back_per_key() {
        let settings = Settings::parse("background_index:3\nmusic_enabled:maybe\ngarbage\nsounds_enabled:false\n");
        assert_eq!(settings.background_index, 3);
        assert!(settings.music_enabled);
        assert!(!settings.sounds_enabled);
    }

    #[test]
    fn out_of_range_background_uses_default() {
        assert_eq!(Settings::parse("background_index:4").background_index, 0);
        assert_eq!(Settings::parse("background_index:-1").background_index, 0);
        assert_eq!(Settings::parse("background_index:two").background_index, 0);
    }

    #[test]
    fn render_then_parse_reproduces_settings() {
        let settings = Settings {
            background_index: 1,
            music_enabled: false,
            sounds_enabled: true,
        };
        assert_eq!(Settings::parse(&settings.render()), settings);
    }

    #[test]
    fn background_cycles() {
        let mut settings = Settings::default();
        settings.previous_background();
        assert_eq!(settings.background_index, BACKGROUND_COUNT - 1);
        settings.next_background();
        assert_eq!(settings.background_index, 0);
        settings.next_background();
        assert_eq!(settings.background_index, 1);
    }

    #[test]
    fn toggles() {
        let mut settings = Settings::default();
        assert!(!settings.toggle_music());
        assert!(settings.toggle_music());
        assert!(!settings.toggle_sounds());
    }

    #[test]
    fn store_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("game_settings.txt"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn store_unreadable_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("game_settings.txt"));
        let settings = Settings {
            background_index: 3,
            music_enabled: false,
            sounds_enabled: false,
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }
}
