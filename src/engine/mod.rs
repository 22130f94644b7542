//! Progress engine
//!
//! The stateful core of the game: word submission and level navigation over an
//! explicit `ProgressState`. Every operation is a pure function of (catalog, state, input)
//! and reports what the caller should do with storage through `Effect`.

mod outcome;
mod progress;
mod state;

pub use outcome::{Effect, Outcome, Transition};
pub use progress::{Engine, StartMode};
pub use state::ProgressState;
