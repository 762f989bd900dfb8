//! Simulation command
//!
//! Plays many independent automatic rounds and aggregates the outcomes.

use crate::autoplay::{RoundOutcome, StrategyType, play_round};
use crate::engine::GameEngine;
use crate::wordlists::WordPool;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub rounds: usize,
    pub seed: u64,
    pub word_count: usize,
    pub strategy: String,
    pub use_hints: bool,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub fn new(rounds: usize, seed: u64) -> Self {
        Self {
            rounds,
            seed,
            word_count: crate::engine::rules::DEFAULT_WORD_COUNT,
            strategy: "frequency".to_string(),
            use_hints: true,
            show_progress: true,
        }
    }
}

/// Aggregate statistics over all simulated rounds
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub average_score: f64,
    pub best_score: u32,
    pub total_hints: u32,
    pub average_wrong_guesses: f64,
    /// Lives left at the end of won rounds -> count
    pub lives_distribution: BTreeMap<u8, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Run `config.rounds` seeded rounds in parallel
///
/// Round `i` uses seed `config.seed + i` for both word selection and the strategy,
/// so results do not depend on thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_simulation(pool: &WordPool, config: &SimulateConfig) -> SimulationResult {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let mut engine = GameEngine::headless(pool.clone(), seed);
            engine.start_new_game(config.word_count);

            let mut strategy = StrategyType::from_name(&config.strategy, seed);
            let outcome = play_round(&mut engine, &mut strategy, config.use_hints);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(&outcomes, duration);
    info!(
        rounds = result.rounds,
        won = result.won,
        average_score = result.average_score,
        "simulation finished"
    );
    result
}

fn summarize(outcomes: &[RoundOutcome], duration: Duration) -> SimulationResult {
    let rounds = outcomes.len();
    let won = outcomes.iter().filter(|o| o.won()).count();

    let mut lives_distribution: BTreeMap<u8, usize> = BTreeMap::new();
    for outcome in outcomes.iter().filter(|o| o.won()) {
        *lives_distribution.entry(outcome.lives).or_insert(0) += 1;
    }

    let ratio = |total: f64| {
        if rounds > 0 {
            total / rounds as f64
        } else {
            0.0
        }
    };

    SimulationResult {
        rounds,
        won,
        lost: rounds - won,
        win_rate: ratio(won as f64),
        average_score: ratio(outcomes.iter().map(|o| f64::from(o.score)).sum()),
        best_score: outcomes.iter().map(|o| o.score).max().unwrap_or(0),
        total_hints: outcomes.iter().map(|o| o.hints_used).sum(),
        average_wrong_guesses: ratio(outcomes.iter().map(|o| o.wrong_guesses as f64).sum()),
        lives_distribution,
        duration,
        rounds_per_second: if duration.as_secs_f64() > 0.0 {
            rounds as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
