//! Formatting utilities for terminal output

use crate::engine::GameStatus;

/// How a key on the letter keyboard should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not pressed yet
    Unused,
    /// Revealed at least once, more occurrences hidden
    Partial,
    /// Every occurrence revealed; further presses are rejected
    Done,
    /// Pressed and in no word
    Wrong,
}

/// Classify a letter for keyboard display
#[must_use]
pub fn key_state(status: &GameStatus, letter: char) -> KeyState {
    let info = status.letter_status.get(&letter).copied().unwrap_or_default();

    if !info.present_in_any {
        if status.guessed_letters.contains(&letter) {
            KeyState::Wrong
        } else {
            KeyState::Unused
        }
    } else if !info.remaining {
        KeyState::Done
    } else if status.correct_letters.contains(&letter) {
        KeyState::Partial
    } else {
        KeyState::Unused
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short Dutch summary line under the words
#[must_use]
pub fn round_summary(status: &GameStatus) -> String {
    use crate::engine::Phase;

    match status.phase {
        Phase::Playing => format!(
            "Totaal {} woorden - {} letters geraden",
            status.words.len(),
            status.correct_letters.len()
        ),
        Phase::Won => "Gefeliciteerd! Je hebt alle woorden geraden!".to_string(),
        Phase::Lost => "Game over!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::GameEngine;
    use crate::wordlists::WordPool;

    fn engine(word: &str) -> GameEngine {
        let pool = WordPool::from_words(vec![Word::new(word).unwrap()]);
        let mut engine = GameEngine::headless(pool, 0);
        engine.start_new_game(1);
        engine
    }

    #[test]
    fn key_states_follow_guesses() {
        let mut engine = engine("KAAS");
        engine.guess_letter('A');
        engine.guess_letter('K');
        engine.guess_letter('X');
        let status = engine.status();

        assert_eq!(key_state(&status, 'A'), KeyState::Partial);
        assert_eq!(key_state(&status, 'K'), KeyState::Done);
        assert_eq!(key_state(&status, 'X'), KeyState::Wrong);
        assert_eq!(key_state(&status, 'S'), KeyState::Unused);
        assert_eq!(key_state(&status, 'Z'), KeyState::Unused);
    }

    #[test]
    fn summary_counts_correct_letters() {
        let mut engine = engine("HUIS");
        engine.guess_letter('H');
        assert_eq!(
            round_summary(&engine.status()),
            "Totaal 1 woorden - 1 letters geraden"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
