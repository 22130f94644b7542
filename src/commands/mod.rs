//! Command implementations

pub mod check;
pub mod levels;
pub mod reset;
pub mod simple;

pub use check::{CheckResult, check_word};
pub use levels::{LevelSummary, summarize_levels};
pub use reset::reset_progress;
pub use simple::run_simple;
