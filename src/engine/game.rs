//! The game state machine
//!
//! Owns the active puzzle, guess history and round counters. All rule violations
//! are reported as `false` with state left untouched.

use super::ports::{
    Dialog, DialogAction, NullPresenter, Presenter, Silent, Sound, SoundPlayer, Toast, ToastKind,
};
use super::rules::{
    ALPHABET, DEFAULT_WORD_COUNT, HINT_LIFE_THRESHOLD, MAX_LIVES, POINTS_PER_LETTER,
    STREAK_FOR_BONUS, WIN_BONUS,
};
use super::status::{GameStatus, LetterStatus, Phase};
use crate::core::Puzzle;
use crate::wordlists::WordPool;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Hangman-style engine over a fixed word pool
///
/// Construct it, optionally apply the persisted sound preference, then call
/// [`GameEngine::start_new_game`] before accepting input.
///
/// # Examples
/// ```
/// use woordpuzzel::core::Word;
/// use woordpuzzel::engine::{GameEngine, Phase};
/// use woordpuzzel::wordlists::WordPool;
///
/// let pool = WordPool::from_words(vec![Word::new("HUIS").unwrap()]);
/// let mut engine = GameEngine::headless(pool, 1);
/// engine.start_new_game(1);
///
/// for letter in ['H', 'U', 'I', 'S'] {
///     assert!(engine.guess_letter(letter));
/// }
/// assert_eq!(engine.phase(), Phase::Won);
/// assert_eq!(engine.score(), 90);
/// ```
pub struct GameEngine<P = NullPresenter, S = Silent> {
    pool: WordPool,
    rng: StdRng,
    presenter: P,
    sound: S,
    puzzle: Puzzle,
    guessed: Vec<char>,
    correct: Vec<char>,
    wrong: Vec<char>,
    lives: u8,
    score: u32,
    streak: u32,
    hints_used: u32,
    phase: Phase,
    sound_enabled: bool,
    word_count: usize,
}

impl GameEngine {
    /// Engine with no collaborators and a seeded RNG
    #[must_use]
    pub fn headless(pool: WordPool, seed: u64) -> Self {
        Self::new(pool, NullPresenter, Silent).with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<P: Presenter, S: SoundPlayer> GameEngine<P, S> {
    /// Create an engine wired to its presentation and audio collaborators
    ///
    /// The RNG is seeded from the OS; sound starts enabled.
    pub fn new(pool: WordPool, presenter: P, sound: S) -> Self {
        Self {
            pool,
            rng: StdRng::from_os_rng(),
            presenter,
            sound,
            puzzle: Puzzle::default(),
            guessed: Vec::new(),
            correct: Vec::new(),
            wrong: Vec::new(),
            lives: MAX_LIVES,
            score: 0,
            streak: 0,
            hints_used: 0,
            phase: Phase::Playing,
            sound_enabled: true,
            word_count: DEFAULT_WORD_COUNT,
        }
    }

    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn with_sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Start a round with `word_count` distinct words (clamped to the pool size)
    ///
    /// Replaces the puzzle, guess history and counters wholesale.
    pub fn start_new_game(&mut self, word_count: usize) {
        self.word_count = word_count;
        let words = self.pool.sample(word_count, &mut self.rng);

        self.puzzle = Puzzle::new(words);
        self.guessed.clear();
        self.correct.clear();
        self.wrong.clear();
        self.lives = MAX_LIVES;
        self.score = 0;
        self.streak = 0;
        self.hints_used = 0;
        self.phase = Phase::Playing;

        info!(words = self.puzzle.words().len(), "new round started");
        debug!(words = ?self.word_texts(), "round words");

        self.refresh();
    }

    /// Guess a letter, revealing at most one position
    ///
    /// Returns false (and changes nothing) when the round is over, the input is not
    /// an ASCII letter, or the letter was pressed before and has no unrevealed
    /// occurrence left.
    pub fn guess_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let letter = letter.to_ascii_uppercase();

        if self.phase != Phase::Playing {
            return false;
        }

        let remaining = self.puzzle.first_unrevealed(letter);

        if remaining.is_none() && self.guessed.contains(&letter) {
            debug!(%letter, "letter exhausted, rejected");
            return false;
        }

        add_letter(&mut self.guessed, letter);

        if let Some((word_index, position)) = remaining {
            self.puzzle.reveal(word_index, position);
            add_letter(&mut self.correct, letter);
            self.score += POINTS_PER_LETTER;
            self.streak += 1;
            debug!(%letter, word_index, position, score = self.score, "letter revealed");
            self.play_sound(Sound::Correct);

            if self.streak == STREAK_FOR_BONUS && self.lives < MAX_LIVES {
                self.lives += 1;
                self.streak = 0;
                info!(lives = self.lives, "streak bonus");
                self.presenter.show_toast(Toast::success(
                    "Streak Bonus!",
                    "Je hebt een extra leven gekregen! 🎉",
                ));
            }

            if self.puzzle.is_complete() {
                self.win_game();
            }
        } else if !self.puzzle.contains_letter(letter) {
            add_letter(&mut self.wrong, letter);
            self.lives = self.lives.saturating_sub(1);
            self.streak = 0;
            debug!(%letter, lives = self.lives, "letter not in any word");

            if self.lives > 0 {
                self.play_sound(Sound::Wrong);
            } else {
                self.lose_game();
            }
        }

        self.refresh();
        true
    }

    /// Reveal one random unrevealed position
    ///
    /// Only available while playing with fewer than two lives. Leaves score, lives
    /// and streak alone.
    pub fn use_hint(&mut self) -> bool {
        if self.lives >= HINT_LIFE_THRESHOLD {
            debug!(lives = self.lives, "hint refused, too many lives");
            return false;
        }

        if self.phase != Phase::Playing {
            debug!(phase = %self.phase, "hint refused, round not active");
            return false;
        }

        let candidates = self.puzzle.unrevealed_positions();
        if candidates.is_empty() {
            debug!("hint refused, nothing left to reveal");
            return false;
        }

        let (word_index, position) = candidates[self.rng.random_range(0..candidates.len())];
        let letter = self.puzzle.words()[word_index].letter_at(position);

        self.puzzle.reveal(word_index, position);
        add_letter(&mut self.guessed, letter);
        add_letter(&mut self.correct, letter);
        self.hints_used += 1;

        info!(%letter, word_index, position, hints_used = self.hints_used, "hint used");
        self.presenter.show_toast(Toast::new(
            ToastKind::Info,
            "Hint gebruikt",
            format!("Letter \"{letter}\" onthuld"),
        ));

        if self.puzzle.is_complete() {
            self.win_game();
        }

        self.refresh();
        true
    }

    /// Flip the sound flag and return the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Carry out a dialog's button
    pub fn acknowledge(&mut self, action: DialogAction) {
        match action {
            DialogAction::NextWord => self.start_new_game(self.word_count),
            DialogAction::NewGame => {
                self.score = 0;
                self.start_new_game(self.word_count);
            }
        }
    }

    /// Owned snapshot of everything a front-end may show
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let word_total = self.puzzle.words().len();

        let letter_status = ALPHABET
            .iter()
            .map(|&ch| {
                (
                    ch,
                    LetterStatus {
                        present_in_any: self.puzzle.contains_letter(ch),
                        remaining: self.puzzle.has_unrevealed(ch),
                    },
                )
            })
            .collect();

        GameStatus {
            words: self.word_texts(),
            word_progress: (0..word_total).map(|i| self.puzzle.progress(i)).collect(),
            revealed_positions: (0..word_total)
                .map(|i| self.puzzle.revealed_positions(i))
                .collect(),
            guessed_letters: self.guessed.clone(),
            correct_letters: self.correct.clone(),
            wrong_letters: self.wrong.clone(),
            letter_status,
            lives: self.lives,
            score: self.score,
            phase: self.phase,
            sound_enabled: self.sound_enabled,
            streak: self.streak,
            hints_used: self.hints_used,
            puzzle_complete: self.puzzle.is_complete(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Word count requested by the last `start_new_game`
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub const fn sound_player(&self) -> &S {
        &self.sound
    }

    fn win_game(&mut self) {
        self.phase = Phase::Won;
        self.score += WIN_BONUS;
        info!(score = self.score, "round won");
        self.play_sound(Sound::Victory);

        let words = self.word_texts();
        let body = if words.len() == 1 {
            format!("Je hebt het woord {} geraden!", quote_words(&words))
        } else {
            format!("Je hebt de woorden {} geraden!", quote_words(&words))
        };

        self.presenter.show_message(Dialog {
            title: "Gefeliciteerd! 🎉".to_string(),
            body,
            button: "Volgend woord".to_string(),
            action: DialogAction::NextWord,
        });
    }

    fn lose_game(&mut self) {
        self.phase = Phase::Lost;
        info!(score = self.score, "round lost");
        self.play_sound(Sound::GameOver);

        let words = self.word_texts();
        let body = if words.len() == 1 {
            format!("Het woord was: {}", quote_words(&words))
        } else {
            format!("De woorden waren: {}", quote_words(&words))
        };

        self.presenter.show_message(Dialog {
            title: "Game Over! 💀".to_string(),
            body,
            button: "Nieuw Spel".to_string(),
            action: DialogAction::NewGame,
        });
    }

    fn play_sound(&mut self, sound: Sound) {
        if self.sound_enabled {
            self.sound.play(sound);
        }
    }

    fn refresh(&mut self) {
        let status = self.status();
        self.presenter.update_display(&status);
    }

    fn word_texts(&self) -> Vec<String> {
        self.puzzle
            .words()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }
}

/// Set-style insert that keeps first-insertion order
fn add_letter(letters: &mut Vec<char>, letter: char) {
    if !letters.contains(&letter) {
        letters.push(letter);
    }
}

fn quote_words(words: &[String]) -> String {
    words
        .iter()
        .map(|w| format!("\"{w}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
