//! Scoring and life rules

/// Lives at the start of a round, and the cap for streak bonuses
pub const MAX_LIVES: u8 = 5;

/// Points for each revealed position from a letter guess
pub const POINTS_PER_LETTER: u32 = 10;

/// Points added when the whole puzzle is solved
pub const WIN_BONUS: u32 = 50;

/// Consecutive correct guesses that earn an extra life
pub const STREAK_FOR_BONUS: u32 = 3;

/// Hints unlock only below this many lives
pub const HINT_LIFE_THRESHOLD: u8 = 2;

/// Words per round when none is requested
pub const DEFAULT_WORD_COUNT: usize = 3;

/// The letters a player can press
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
