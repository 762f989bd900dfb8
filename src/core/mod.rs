//! Core domain types for the word puzzle
//!
//! Pure types with no I/O: validated words and the position-based reveal state
//! of a round.

mod puzzle;
mod word;

pub use puzzle::Puzzle;
pub use word::{Word, WordError};
