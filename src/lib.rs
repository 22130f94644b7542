//! Words From a Word
//!
//! A word puzzle: each level gives a fixed set of letters, and the player builds
//! dictionary words from them. Progress (current level and guessed words) persists
//! between sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use word_from_word::catalog::load_catalog;
//! use word_from_word::engine::{Engine, Outcome, ProgressState};
//!
//! let catalog = load_catalog();
//! let engine = Engine::new(&catalog);
//!
//! let transition = engine.submit_word(ProgressState::new(), "кино");
//! assert_eq!(transition.outcome, Outcome::Accepted(1));
//! ```

// Core domain types
pub mod core;

// Levels and their dictionaries
pub mod catalog;

// Progress state machine
pub mod engine;

// Progress and settings files
pub mod storage;

// Engine plus store for one running game
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
