//! Dutch word lists for the puzzle
//!
//! Provides embedded word lists compiled into the binary and the pool rounds draw from.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT};
pub use pool::WordPool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_count_matches_const() {
        assert_eq!(EASY.len(), EASY_COUNT);
    }

    #[test]
    fn hard_count_matches_const() {
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn words_are_uppercase_ascii() {
        for &word in EASY.iter().chain(HARD) {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn lists_do_not_overlap() {
        let easy: std::collections::HashSet<_> = EASY.iter().collect();
        for word in HARD {
            assert!(!easy.contains(word), "'{word}' is in both lists");
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(EASY_COUNT, 50, "Expected 50 easy words");
        assert_eq!(HARD_COUNT, 25, "Expected 25 hard words");
    }
}
