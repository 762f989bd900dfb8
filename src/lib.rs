//! Woordpuzzel
//!
//! A Dutch word-guessing game in the hangman family: guess letters to reveal
//! one or more hidden words before running out of lives.
//!
//! # Quick Start
//!
//! ```rust
//! use woordpuzzel::core::Word;
//! use woordpuzzel::engine::{GameEngine, Phase};
//! use woordpuzzel::wordlists::WordPool;
//!
//! let pool = WordPool::from_words(vec![Word::new("banaan").unwrap()]);
//! let mut engine = GameEngine::headless(pool, 7);
//! engine.start_new_game(1);
//!
//! // Each guess reveals a single occurrence
//! engine.guess_letter('a');
//! assert_eq!(engine.status().word_progress[0], "_ A _ _ _ _");
//! assert_eq!(engine.phase(), Phase::Playing);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game state machine
pub mod engine;

// Settings and statistics persistence
pub mod storage;

// Sound output
pub mod audio;

// Automatic players
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
