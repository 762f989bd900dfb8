//! Read-only snapshot of engine state
//!
//! Everything here is an owned copy; mutating a snapshot never touches the engine.

use super::rules::{HINT_LIFE_THRESHOLD, MAX_LIVES};
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Per-letter keyboard state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterStatus {
    /// The letter occurs in at least one word
    pub present_in_any: bool,
    /// Some occurrence is still unrevealed
    pub remaining: bool,
}

/// Snapshot returned by `GameEngine::status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub words: Vec<String>,
    pub word_progress: Vec<String>,
    pub revealed_positions: Vec<Vec<usize>>,
    pub guessed_letters: Vec<char>,
    pub correct_letters: Vec<char>,
    pub wrong_letters: Vec<char>,
    pub letter_status: BTreeMap<char, LetterStatus>,
    pub lives: u8,
    pub score: u32,
    pub phase: Phase,
    pub sound_enabled: bool,
    pub streak: u32,
    pub hints_used: u32,
    pub puzzle_complete: bool,
}

impl GameStatus {
    /// Whether `use_hint` would currently be accepted by the life rule and phase
    #[must_use]
    pub fn hint_available(&self) -> bool {
        self.phase == Phase::Playing && self.lives < HINT_LIFE_THRESHOLD && !self.puzzle_complete
    }

    /// True if pressing `letter` would be rejected as already used up
    #[must_use]
    pub fn is_exhausted(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        let remaining = self.letter_status.get(&letter).is_some_and(|s| s.remaining);
        !remaining && self.guessed_letters.contains(&letter)
    }

    /// Lives as a heart bar, filled then empty
    #[must_use]
    pub fn lives_bar(&self) -> String {
        let filled = usize::from(self.lives.min(MAX_LIVES));
        format!(
            "{}{}",
            "♥".repeat(filled),
            "♡".repeat(usize::from(MAX_LIVES) - filled)
        )
    }
}
