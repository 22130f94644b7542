//! Game session
//!
//! Owns the current `ProgressState` and the progress store, runs engine operations
//! and applies their storage effects. Write faults come back as warnings; the
//! in-memory state stays authoritative for the rest of the session.

use crate::catalog::{Catalog, Level};
use crate::engine::{Effect, Engine, Outcome, ProgressState, StartMode, Transition};
use crate::storage::{PersistenceError, ProgressStore};

/// Result of a player action as seen by the presentation shell
#[derive(Debug)]
pub struct Reply {
    pub outcome: Outcome,
    /// Set when the state changed but could not be persisted
    pub warning: Option<PersistenceError>,
}

/// A running game
pub struct Game<'a, S: ProgressStore> {
    engine: Engine<'a>,
    store: S,
    state: ProgressState,
    finished: bool,
}

impl<'a, S: ProgressStore> Game<'a, S> {
    /// Start a session in the given mode
    ///
    /// `Continue` falls back to a fresh state if stored progress cannot be read.
    pub fn start(catalog: &'a Catalog, store: S, mode: StartMode) -> (Self, Reply) {
        let engine = Engine::new(catalog);

        let stored = match mode {
            StartMode::New => None,
            StartMode::Continue => read_or_default(&store),
        };
        let transition = engine.load_or_init(mode, stored);

        let mut game = Self {
            engine,
            store,
            state: ProgressState::new(),
            finished: false,
        };
        let reply = game.apply(transition);
        tracing::info!(?mode, level = game.state.current_level(), "session started");
        (game, reply)
    }

    /// Whether the store holds progress worth continuing
    pub fn can_continue(store: &S) -> bool {
        read_or_default(store).is_some_and(|state| state.has_progress())
    }

    #[must_use]
    pub const fn state(&self) -> &ProgressState {
        &self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.engine.catalog()
    }

    #[must_use]
    pub fn level(&self) -> &'a Level {
        self.engine.current_level(&self.state)
    }

    #[must_use]
    pub fn level_index(&self) -> usize {
        self.state.current_level()
    }

    /// Words guessed on the current level
    #[must_use]
    pub fn guessed(&self) -> &[String] {
        self.state.guessed(self.state.current_level())
    }

    /// True once the last level has been completed
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn submit_word(&mut self, input: &str) -> Reply {
        let state = self.take_state();
        let transition = self.engine.submit_word(state, input);
        self.apply(transition)
    }

    pub fn go_to_previous_level(&mut self) -> Reply {
        let state = self.take_state();
        let transition = self.engine.go_to_previous_level(state);
        self.apply(transition)
    }

    pub fn go_to_next_level(&mut self) -> Reply {
        let state = self.take_state();
        let transition = self.engine.go_to_next_level(state);
        self.apply(transition)
    }

    /// Persist the current state, as on exit or return to the menu
    ///
    /// Does nothing after the game has been completed, so cleared progress stays cleared.
    ///
    /// # Errors
    /// Returns `PersistenceError` if the store rejects the write.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        if self.finished {
            return Ok(());
        }
        self.store.save(&self.state)
    }

    /// Hand back the store, e.g. to inspect it after the session
    pub fn into_store(self) -> S {
        self.store
    }

    fn take_state(&mut self) -> ProgressState {
        std::mem::take(&mut self.state)
    }

    fn apply(&mut self, transition: Transition) -> Reply {
        let Transition {
            state,
            outcome,
            effect,
        } = transition;
        self.state = state;

        if outcome == Outcome::GameCompleted {
            self.finished = true;
        }

        let result = match effect {
            Effect::None => Ok(()),
            Effect::Save => self.store.save(&self.state),
            Effect::Reset => self.store.reset(),
        };

        let warning = result.err();
        if let Some(err) = &warning {
            tracing::warn!(error = %err, "progress not persisted, keeping in-memory state");
        }

        Reply { outcome, warning }
    }
}

fn read_or_default<S: ProgressStore>(store: &S) -> Option<ProgressState> {
    match store.load() {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(error = %err, "stored progress unusable, starting fresh");
            None
        }
    }
}
