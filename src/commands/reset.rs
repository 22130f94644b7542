//! Progress reset command

use crate::storage::{PersistenceError, ProgressStore};

/// Delete stored progress
///
/// Returns whether there was any progress to delete.
///
/// # Errors
///
/// Returns an error if the store cannot be cleared.
pub fn reset_progress<S: ProgressStore>(store: &mut S) -> Result<bool, PersistenceError> {
    let had_progress = store.load().ok().flatten().is_some();
    store.reset()?;
    tracing::info!(had_progress, "progress reset");
    Ok(had_progress)
}
