//! The word pool a round samples from
//!
//! Easy and hard lists are kept apart for single-list draws, and combined
//! without duplicates for round selection.

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Immutable easy + hard vocabulary
#[derive(Debug, Clone)]
pub struct WordPool {
    easy: Vec<Word>,
    hard: Vec<Word>,
    combined: Vec<Word>,
}

impl WordPool {
    /// Build a pool, dropping duplicates within and across the two lists
    ///
    /// Order is preserved: easy words first, then hard words, each in list order.
    #[must_use]
    pub fn new(easy: Vec<Word>, hard: Vec<Word>) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let easy = dedup(easy, &mut seen);
        let hard = dedup(hard, &mut seen);
        let combined = easy.iter().chain(hard.iter()).cloned().collect();

        Self {
            easy,
            hard,
            combined,
        }
    }

    /// Pool made from a single custom list; every word counts as easy
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self::new(words, Vec::new())
    }

    #[must_use]
    pub fn easy(&self) -> &[Word] {
        &self.easy
    }

    #[must_use]
    pub fn hard(&self) -> &[Word] {
        &self.hard
    }

    /// Easy ∪ hard, distinct words only
    #[must_use]
    pub fn combined(&self) -> &[Word] {
        &self.combined
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// One uniformly random word from the easy list
    pub fn random_easy<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        pick(&self.easy, rng)
    }

    /// One uniformly random word from the hard list
    pub fn random_hard<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        pick(&self.hard, rng)
    }

    /// Sample `count` distinct words from the combined pool
    ///
    /// `count` is clamped to the pool size. Uses rejection sampling: draw a uniform
    /// index, keep the word if it is not already chosen. The pool holds no
    /// duplicates, so this always terminates.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Word> {
        let target = count.min(self.combined.len());
        let mut chosen: Vec<Word> = Vec::with_capacity(target);

        while chosen.len() < target {
            let idx = rng.random_range(0..self.combined.len());
            let word = &self.combined[idx];
            if !chosen.contains(word) {
                chosen.push(word.clone());
            }
        }

        chosen
    }
}

impl Default for WordPool {
    /// The embedded Dutch easy and hard lists
    fn default() -> Self {
        use super::loader::words_from_slice;
        Self::new(words_from_slice(super::EASY), words_from_slice(super::HARD))
    }
}

fn dedup(words: Vec<Word>, seen: &mut FxHashSet<String>) -> Vec<Word> {
    words
        .into_iter()
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    if words.is_empty() {
        None
    } else {
        Some(&words[rng.random_range(0..words.len())])
    }
}
