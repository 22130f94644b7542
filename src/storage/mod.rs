//! Persistence for progress and settings
//!
//! Both stores are small `key:value` text files, rewritten in full on every save.

mod error;
pub mod progress;
pub mod settings;

pub use error::PersistenceError;
pub use progress::{FileProgressStore, MemoryProgressStore, ProgressStore};
pub use settings::{BACKGROUND_COUNT, Settings, SettingsStore};
