//! Level listing command

use crate::catalog::Catalog;
use crate::engine::ProgressState;

/// One row of the level listing
pub struct LevelSummary {
    pub index: usize,
    pub name: String,
    pub source_word: String,
    pub dictionary_size: usize,
    pub required: usize,
    pub guessed: usize,
    pub is_current: bool,
}

/// Summarize every level, annotated with the player's progress
#[must_use]
pub fn summarize_levels(catalog: &Catalog, progress: &ProgressState) -> Vec<LevelSummary> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, level)| LevelSummary {
            index,
            name: level.name().to_string(),
            source_word: level.source_word(),
            dictionary_size: level.dictionary_len(),
            required: level.required(),
            guessed: progress.guessed_count(index),
            is_current: progress.current_level() == index,
        })
        .collect()
}
