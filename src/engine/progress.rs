//! Word submission and level navigation

use super::outcome::{Effect, Outcome, Transition};
use super::state::ProgressState;
use crate::catalog::{Catalog, Level};
use crate::core::Word;

/// How a session begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Discard stored progress and start at the first level
    New,
    /// Resume stored progress, or start fresh if there is none
    Continue,
}

/// Progress state machine over a fixed catalog
///
/// Takes the state by value and hands back the next one; storage is left to the
/// caller through `Transition::effect`.
pub struct Engine<'a> {
    catalog: &'a Catalog,
}

impl<'a> Engine<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The level the state is currently on
    #[must_use]
    pub fn current_level(&self, state: &ProgressState) -> &'a Level {
        self.catalog.level_or_last(state.current_level())
    }

    /// Resolve the starting state
    ///
    /// `New` ignores `stored` and asks for stored progress to be reset.
    /// `Continue` takes `stored` as-is (clamped to the catalog), or the empty state.
    #[must_use]
    pub fn load_or_init(&self, mode: StartMode, stored: Option<ProgressState>) -> Transition {
        match mode {
            StartMode::New => Transition {
                state: ProgressState::new(),
                outcome: Outcome::NoOp,
                effect: Effect::Reset,
            },
            StartMode::Continue => {
                let state = stored.unwrap_or_default().clamped(self.catalog.len());
                Transition::unchanged(state, Outcome::NoOp)
            }
        }
    }

    /// Submit a candidate word for the current level
    ///
    /// Checks run in a fixed order and the first failure decides the outcome:
    /// empty input, letter availability, dictionary membership, duplicate.
    #[must_use]
    pub fn submit_word(&self, state: ProgressState, input: &str) -> Transition {
        let mut state = state.clamped(self.catalog.len());

        let Some(word) = Word::parse(input) else {
            return Transition::unchanged(state, Outcome::NoOp);
        };

        let index = state.current_level();
        let level = self.catalog.level_or_last(index);

        if let Some(missing) = level.letters().first_unavailable(&word) {
            tracing::debug!(word = %word, %missing, "letter not available");
            return Transition::unchanged(state, Outcome::InvalidLetters);
        }

        if !level.contains(&word) {
            tracing::debug!(word = %word, level = index, "word not in dictionary");
            return Transition::unchanged(state, Outcome::NotInDictionary);
        }

        if state.has_guessed(index, word.text()) {
            return Transition::unchanged(state, Outcome::AlreadyGuessed);
        }

        let count = state.record_guess(index, word.into_text());
        tracing::info!(level = index, count, "word accepted");
        Transition::saved(state, Outcome::Accepted(count))
    }

    /// Step back one level; no guess-count gate
    ///
    /// Always asks for the resulting state to be saved, even at level 0.
    #[must_use]
    pub fn go_to_previous_level(&self, state: ProgressState) -> Transition {
        let mut state = state.clamped(self.catalog.len());
        let index = state.current_level();

        if index == 0 {
            return Transition::saved(state, Outcome::NoOp);
        }

        state.set_current_level(index - 1);
        Transition::saved(state, Outcome::Retreated(index - 1))
    }

    /// Step forward one level, or finish the game from the last level
    ///
    /// Requires the level's guess threshold. Finishing clears all progress.
    #[must_use]
    pub fn go_to_next_level(&self, state: ProgressState) -> Transition {
        let mut state = state.clamped(self.catalog.len());
        let index = state.current_level();
        let level = self.catalog.level_or_last(index);

        if state.guessed_count(index) < level.required() {
            return Transition::unchanged(state, Outcome::InsufficientWords(level.required()));
        }

        if self.catalog.is_last(index) {
            tracing::info!("all levels completed");
            return Transition {
                state: ProgressState::new(),
                outcome: Outcome::GameCompleted,
                effect: Effect::Reset,
            };
        }

        state.set_current_level(index + 1);
        tracing::info!(level = index + 1, "advanced");
        Transition::saved(state, Outcome::Advanced(index + 1))
    }
}
