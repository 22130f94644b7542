//! Core domain types for the word puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and works on canonical (case- and ё-folded) text.

mod bag;
mod letters;
mod word;

pub use bag::LetterBag;
pub use letters::{canonical_char, canonicalize};
pub use word::Word;
