//! Player progress

use std::collections::BTreeMap;

/// Current level plus the words guessed on each level
///
/// Guessed words keep insertion order for display. Levels are keyed by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    current_level: usize,
    guessed: BTreeMap<usize, Vec<String>>,
}

impl ProgressState {
    /// Fresh progress: level 0, nothing guessed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from stored parts
    #[must_use]
    pub const fn from_parts(current_level: usize, guessed: BTreeMap<usize, Vec<String>>) -> Self {
        Self {
            current_level,
            guessed,
        }
    }

    #[must_use]
    pub const fn current_level(&self) -> usize {
        self.current_level
    }

    /// Words guessed on `level`, in the order they were accepted
    #[must_use]
    pub fn guessed(&self, level: usize) -> &[String] {
        self.guessed.get(&level).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn guessed_count(&self, level: usize) -> usize {
        self.guessed(level).len()
    }

    #[must_use]
    pub fn has_guessed(&self, level: usize, word: &str) -> bool {
        self.guessed(level).iter().any(|w| w == word)
    }

    /// All levels with a guessed-word entry, in index order
    #[must_use]
    pub const fn guessed_by_level(&self) -> &BTreeMap<usize, Vec<String>> {
        &self.guessed
    }

    /// True when there is anything worth continuing from
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.current_level > 0 || self.guessed.values().any(|words| !words.is_empty())
    }

    pub(crate) fn set_current_level(&mut self, level: usize) {
        self.current_level = level;
    }

    pub(crate) fn record_guess(&mut self, level: usize, word: String) -> usize {
        let words = self.guessed.entry(level).or_default();
        words.push(word);
        words.len()
    }

    /// Clamp the current level into `0..level_count`
    #[must_use]
    pub fn clamped(mut self, level_count: usize) -> Self {
        let last = level_count.saturating_sub(1);
        if self.current_level > last {
            tracing::warn!(
                stored = self.current_level,
                last,
                "stored level beyond catalog, clamping"
            );
            self.current_level = last;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = ProgressState::new();
        assert_eq!(state.current_level(), 0);
        assert_eq!(state.guessed_count(0), 0);
        assert!(state.guessed(5).is_empty());
        assert!(!state.has_progress());
    }

    #[test]
    fn record_guess_preserves_order() {
        let mut state = ProgressState::new();
        assert_eq!(state.record_guess(0, "зона".to_string()), 1);
        assert_eq!(state.record_guess(0, "кино".to_string()), 2);
        assert_eq!(state.guessed(0), &["зона", "кино"]);
        assert!(state.has_guessed(0, "кино"));
        assert!(!state.has_guessed(1, "кино"));
        assert!(state.has_progress());
    }

    #[test]
    fn level_alone_counts_as_progress() {
        let mut state = ProgressState::new();
        state.set_current_level(1);
        assert!(state.has_progress());
    }

    #[test]
    fn empty_entries_are_not_progress() {
        let mut guessed = BTreeMap::new();
        guessed.insert(0, Vec::new());
        let state = ProgressState::from_parts(0, guessed);
        assert!(!state.has_progress());
    }

    #[test]
    fn clamped_limits_level() {
        let state = ProgressState::from_parts(7, BTreeMap::new()).clamped(3);
        assert_eq!(state.current_level(), 2);

        let state = ProgressState::from_parts(1, BTreeMap::new()).clamped(3);
        assert_eq!(state.current_level(), 1);
    }
}
