//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::engine::GameStatus;
use crate::engine::rules::ALPHABET;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letters ordered by how often they occur in Dutch text
pub const DUTCH_FREQUENCY_ORDER: [char; 26] = [
    'E', 'N', 'A', 'T', 'I', 'R', 'O', 'D', 'S', 'L', 'G', 'V', 'H', 'K', 'M', 'U', 'B', 'P', 'W',
    'J', 'Z', 'C', 'F', 'X', 'Y', 'Q',
];

/// A strategy for choosing the next letter to press
pub trait Strategy {
    /// Pick a letter the engine would accept
    ///
    /// Returns `None` if every letter is used up.
    fn next_letter(&mut self, status: &GameStatus) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Dutch letter frequency order (default)
    Frequency(FrequencyStrategy),
    /// Uniform choice among playable letters
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_letter(&mut self, status: &GameStatus) -> Option<char> {
        match self {
            Self::Frequency(s) => s.next_letter(status),
            Self::Random(s) => s.next_letter(status),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the name is
    /// unrecognized. `seed` feeds the random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Presses letters from most to least common in Dutch
#[derive(Debug, Default, Clone, Copy)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_letter(&mut self, status: &GameStatus) -> Option<char> {
        DUTCH_FREQUENCY_ORDER
            .iter()
            .copied()
            .find(|&letter| !status.is_exhausted(letter))
    }
}

/// Presses a random playable letter
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn next_letter(&mut self, status: &GameStatus) -> Option<char> {
        let playable: Vec<char> = ALPHABET
            .iter()
            .copied()
            .filter(|&letter| !status.is_exhausted(letter))
            .collect();

        if playable.is_empty() {
            None
        } else {
            Some(playable[self.rng.random_range(0..playable.len())])
        }
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
    fn frequency_order_is_a_permutation_of_the_alphabet() {
        let mut sorted = DUTCH_FREQUENCY_ORDER;
        sorted.sort_unstable();
        assert_eq!(sorted, ALPHABET);
    }

    #[test]
    fn frequency_skips_exhausted_letters() {
        let mut engine = engine("HUIS");
        let mut strategy = FrequencyStrategy;

        assert_eq!(strategy.next_letter(&engine.status()), Some('E'));
        engine.guess_letter('E');
        assert_eq!(strategy.next_letter(&engine.status()), Some('N'));
    }

    #[test]
    fn frequency_repeats_letter_with_remaining_occurrences() {
        let mut engine = engine("EEN");
        let mut strategy = FrequencyStrategy;

        engine.guess_letter('E');
        assert_eq!(strategy.next_letter(&engine.status()), Some('E'));
        engine.guess_letter('E');
        assert_eq!(strategy.next_letter(&engine.status()), Some('N'));
    }

    #[test]
    fn random_picks_only_playable_letters() {
        let mut engine = engine("HUIS");
        for letter in ['A', 'B', 'C', 'D'] {
            engine.guess_letter(letter);
        }

        let mut strategy = RandomStrategy::new(3);
        let status = engine.status();
        for _ in 0..100 {
            let letter = strategy.next_letter(&status).unwrap();
            assert!(!['A', 'B', 'C', 'D'].contains(&letter));
        }
    }

    #[test]
    fn random_is_reproducible() {
        let status = engine("HUIS").status();
        let mut a = RandomStrategy::new(42);
        let mut b = RandomStrategy::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_letter(&status), b.next_letter(&status));
        }
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert!(matches!(
            StrategyType::from_name("frequency", 0),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("random", 0),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unknown", 0),
            StrategyType::Frequency(_)
        ));
    }
}
