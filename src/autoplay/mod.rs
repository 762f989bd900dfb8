//! Automatic players
//!
//! Letter-picking strategies that drive a `GameEngine` through a whole round,
//! used by the simulation command.

mod strategy;

pub use strategy::{DUTCH_FREQUENCY_ORDER, FrequencyStrategy, RandomStrategy, Strategy, StrategyType};

use crate::engine::{GameEngine, Phase, Presenter, SoundPlayer};

/// Upper bound on actions per round; a round always ends well before this
const MAX_ACTIONS: usize = 10_000;

/// How an automatic round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub phase: Phase,
    pub score: u32,
    pub lives: u8,
    pub hints_used: u32,
    pub wrong_guesses: usize,
    pub words: usize,
}

impl RoundOutcome {
    #[must_use]
    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }
}

/// Play the engine's current round to the end
///
/// With `use_hints`, a hint is taken whenever one is available before guessing.
pub fn play_round<P, S, St>(
    engine: &mut GameEngine<P, S>,
    strategy: &mut St,
    use_hints: bool,
) -> RoundOutcome
where
    P: Presenter,
    S: SoundPlayer,
    St: Strategy + ?Sized,
{
    for _ in 0..MAX_ACTIONS {
        if engine.phase() != Phase::Playing {
            break;
        }

        let status = engine.status();
        if use_hints && status.hint_available() && engine.use_hint() {
            continue;
        }

        let Some(letter) = strategy.next_letter(&status) else {
            break;
        };
        if !engine.guess_letter(letter) {
            break;
        }
    }

    let status = engine.status();
    RoundOutcome {
        phase: status.phase,
        score: status.score,
        lives: status.lives,
        hints_used: status.hints_used,
        wrong_guesses: status.wrong_letters.len(),
        words: status.words.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordPool;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn frequency_player_solves_easy_word() {
        // Only A misses before every letter of TREIN is revealed
        let pool = WordPool::from_words(vec![Word::new("TREIN").unwrap()]);
        let mut engine = GameEngine::headless(pool, 1);
        engine.start_new_game(1);

        let outcome = play_round(&mut engine, &mut FrequencyStrategy, false);
        assert!(outcome.won());
        assert_eq!(outcome.wrong_guesses, 1);
        assert_eq!(outcome.score, 5 * 10 + 50);
        assert_eq!(outcome.words, 1);
    }

    #[test]
    fn every_round_terminates() {
        let pool = WordPool::default();
        for seed in 0..20 {
            let mut engine = GameEngine::headless(pool.clone(), seed);
            engine.start_new_game(3);
            let mut strategy = StrategyType::from_name("random", seed);
            let outcome = play_round(&mut engine, &mut strategy, true);
            assert!(outcome.phase.is_over(), "seed {seed} did not finish");
        }
    }

    #[test]
    fn hints_are_only_taken_when_low_on_lives() {
        let pool = WordPool::from_words(words_from_slice(&["QUIZ"]));
        let mut engine = GameEngine::headless(pool, 9);
        engine.start_new_game(1);

        let outcome = play_round(&mut engine, &mut FrequencyStrategy, true);
        assert!(outcome.won());
        assert!(outcome.hints_used > 0);
        assert!(outcome.lives < 2);
    }

    #[test]
    fn empty_round_is_lost() {
        let pool = WordPool::from_words(Vec::new());
        let mut engine = GameEngine::headless(pool, 0);
        engine.start_new_game(3);

        let outcome = play_round(&mut engine, &mut FrequencyStrategy, true);
        assert_eq!(outcome.phase, Phase::Lost);
        assert_eq!(outcome.wrong_guesses, 5);
    }
}
