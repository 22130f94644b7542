//! Results of engine operations

use super::state::ProgressState;
use std::fmt;

/// What happened in response to a player action
///
/// Rejections are ordinary outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do (empty input, or already at the first level)
    NoOp,
    /// The word uses a letter the level does not have (or uses it too often)
    InvalidLetters,
    /// The word is spellable but not in the level's dictionary
    NotInDictionary,
    /// The word was already accepted on this level
    AlreadyGuessed,
    /// The word was recorded; carries the new guessed count for the level
    Accepted(usize),
    /// Not enough words to move on; carries the level's requirement
    InsufficientWords(usize),
    /// Moved forward to the given level index
    Advanced(usize),
    /// Moved back to the given level index
    Retreated(usize),
    /// The last level was finished, progress is cleared
    GameCompleted,
}

impl Outcome {
    /// True for outcomes the shell should present as a rejection
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            Self::InvalidLetters | Self::NotInDictionary | Self::InsufficientWords(_)
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => write!(f, "Nothing to do"),
            Self::InvalidLetters => write!(f, "Use only the available letters!"),
            Self::NotInDictionary => write!(f, "That word is not in the list!"),
            Self::AlreadyGuessed => write!(f, "Already guessed"),
            Self::Accepted(count) => write!(f, "Accepted! {count} guessed on this level"),
            Self::InsufficientWords(required) => {
                write!(f, "Guess {required} words to move on!")
            }
            Self::Advanced(index) => write!(f, "Welcome to level {}", index + 1),
            Self::Retreated(index) => write!(f, "Back to level {}", index + 1),
            Self::GameCompleted => write!(f, "Congratulations! You finished every level!"),
        }
    }
}

/// Storage side effect the caller must apply after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// State unchanged, nothing to write
    None,
    /// Overwrite stored progress with the new state
    Save,
    /// Delete stored progress entirely
    Reset,
}

/// The next state, the outcome, and the storage effect of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ProgressState,
    pub outcome: Outcome,
    pub effect: Effect,
}

impl Transition {
    pub(crate) const fn unchanged(state: ProgressState, outcome: Outcome) -> Self {
        Self {
            state,
            outcome,
            effect: Effect::None,
        }
    }

    pub(crate) const fn saved(state: ProgressState, outcome: Outcome) -> Self {
        Self {
            state,
            outcome,
            effect: Effect::Save,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections() {
        assert!(Outcome::InvalidLetters.is_rejection());
        assert!(Outcome::NotInDictionary.is_rejection());
        assert!(Outcome::InsufficientWords(5).is_rejection());
        assert!(!Outcome::AlreadyGuessed.is_rejection());
        assert!(!Outcome::Accepted(1).is_rejection());
        assert!(!Outcome::NoOp.is_rejection());
    }

    #[test]
    fn display_uses_one_based_levels() {
        assert_eq!(Outcome::Advanced(1).to_string(), "Welcome to level 2");
        assert_eq!(Outcome::Retreated(0).to_string(), "Back to level 1");
        assert_eq!(
            Outcome::InsufficientWords(5).to_string(),
            "Guess 5 words to move on!"
        );
    }
}
