//! Active puzzle: the round's words and which letter positions are revealed
//!
//! Revealing is tracked per position, not per letter identity, so a word with a
//! repeated letter needs one reveal for each occurrence.

use super::Word;
use rustc_hash::FxHashSet;

/// The words of a round and their revealed positions
#[derive(Debug, Clone, Default)]
pub struct Puzzle {
    words: Vec<Word>,
    revealed: Vec<FxHashSet<usize>>,
}

impl Puzzle {
    /// Create a puzzle with nothing revealed
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let revealed = words.iter().map(|_| FxHashSet::default()).collect();
        Self { words, revealed }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Whether position `position` of word `word_index` has been revealed
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, word_index: usize, position: usize) -> bool {
        self.revealed
            .get(word_index)
            .is_some_and(|set| set.contains(&position))
    }

    /// Revealed positions of one word, sorted ascending
    #[must_use]
    pub fn revealed_positions(&self, word_index: usize) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .revealed
            .get(word_index)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        positions.sort_unstable();
        positions
    }

    /// Mark one position as revealed
    ///
    /// Returns false if the position does not exist or was already revealed.
    pub fn reveal(&mut self, word_index: usize, position: usize) -> bool {
        let in_bounds = self
            .words
            .get(word_index)
            .is_some_and(|word| position < word.len());
        if !in_bounds {
            return false;
        }
        self.revealed[word_index].insert(position)
    }

    /// First unrevealed occurrence of `letter`, scanning words in order and
    /// positions left to right
    #[must_use]
    pub fn first_unrevealed(&self, letter: char) -> Option<(usize, usize)> {
        self.words.iter().enumerate().find_map(|(word_index, word)| {
            word.positions_of(letter)
                .iter()
                .find(|&&pos| !self.revealed[word_index].contains(&pos))
                .map(|&pos| (word_index, pos))
        })
    }

    /// True if some word still has `letter` at an unrevealed position
    #[inline]
    #[must_use]
    pub fn has_unrevealed(&self, letter: char) -> bool {
        self.first_unrevealed(letter).is_some()
    }

    /// True if any word contains `letter`, revealed or not
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.words.iter().any(|word| word.has_letter(letter))
    }

    /// Every `(word_index, position)` pair not yet revealed, in scan order
    #[must_use]
    pub fn unrevealed_positions(&self) -> Vec<(usize, usize)> {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_index, word)| {
                (0..word.len())
                    .filter(move |pos| !self.revealed[word_index].contains(pos))
                    .map(move |pos| (word_index, pos))
            })
            .collect()
    }

    /// A word is complete when every one of its positions is revealed
    #[must_use]
    pub fn is_word_complete(&self, word_index: usize) -> bool {
        self.words
            .get(word_index)
            .is_some_and(|word| self.revealed[word_index].len() == word.len())
    }

    /// True when all words are complete (vacuously true for an empty puzzle)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        (0..self.words.len()).all(|i| self.is_word_complete(i))
    }

    /// Progress string for one word: revealed letters and `_` blanks, space separated
    ///
    /// # Examples
    /// ```
    /// use woordpuzzel::core::{Puzzle, Word};
    ///
    /// let mut puzzle = Puzzle::new(vec![Word::new("HUIS").unwrap()]);
    /// puzzle.reveal(0, 0);
    /// puzzle.reveal(0, 3);
    /// assert_eq!(puzzle.progress(0), "H _ _ S");
    /// ```
    #[must_use]
    pub fn progress(&self, word_index: usize) -> String {
        let Some(word) = self.words.get(word_index) else {
            return String::new();
        };

        word.letters()
            .iter()
            .enumerate()
            .map(|(pos, &ch)| {
                if self.revealed[word_index].contains(&pos) {
                    ch
                } else {
                    '_'
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
