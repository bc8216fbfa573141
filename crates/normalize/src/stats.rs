//! Typing statistics over normalized text.
//!
//! The required speed is the words-per-minute pace needed to get through
//! the whole passage in a ten minute session:
//!
//! ```text
//! required_wpm = word_count / 10 + 1
//! ```
//!
//! Integer division rounds down, the `+ 1` keeps the minimum at one and
//! covers the remainder.
//!
//! ```rust
//! use normalize::compute_stats;
//!
//! let stats = compute_stats("the|quick|brown|fox");
//! assert_eq!(stats.char_count, 19);
//! assert_eq!(stats.word_count, 4);
//! assert_eq!(stats.required_wpm, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::SEPARATOR;

/// Length of the practice session the required speed is computed for.
pub const SESSION_MINUTES: usize = 10;

/// Character count, word count and required speed of a normalized passage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextStats {
    /// Characters (Unicode scalar values) including separators.
    pub char_count: usize,
    /// Separator-delimited segments. Never zero.
    pub word_count: usize,
    /// Words per minute needed to finish within [`SESSION_MINUTES`].
    pub required_wpm: usize,
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Char count: {}", self.char_count)?;
        writeln!(f, "Word count: {}", self.word_count)?;
        write!(
            f,
            "WPM required for {SESSION_MINUTES} mins: {}",
            self.required_wpm
        )
    }
}

/// Computes [`TextStats`] for already-normalized text.
///
/// Input without any separator counts as one word, the empty string included.
pub fn compute_stats(normalized: &str) -> TextStats {
    let char_count = normalized.chars().count();
    let word_count = normalized.split(SEPARATOR).count();
    TextStats {
        char_count,
        word_count,
        required_wpm: required_wpm(word_count),
    }
}

/// Words per minute needed to type `word_count` words in one session.
pub fn required_wpm(word_count: usize) -> usize {
    word_count / SESSION_MINUTES + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_stats() {
        let stats = compute_stats("a");
        assert_eq!(
            stats,
            TextStats {
                char_count: 1,
                word_count: 1,
                required_wpm: 1
            }
        );
    }

    #[test]
    fn empty_text_is_one_word() {
        let stats = compute_stats("");
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.word_count, 1);
        assert_eq!(stats.required_wpm, 1);
    }

    #[test]
    fn word_count_is_separators_plus_one() {
        for k in [0usize, 1, 5, 42] {
            let text = vec!["w"; k + 1].join("|");
            assert_eq!(compute_stats(&text).word_count, k + 1);
        }
    }

    #[test]
    fn required_speed_boundaries() {
        for words in 1..=9 {
            assert_eq!(required_wpm(words), 1, "{words} words");
        }
        for words in 10..=19 {
            assert_eq!(required_wpm(words), 2, "{words} words");
        }
        assert_eq!(required_wpm(100), 11);
        assert_eq!(required_wpm(1000), 101);
    }

    #[test]
    fn hundred_words_of_ten_chars() {
        let text = vec!["a".repeat(10); 100].join("|");
        let stats = compute_stats(&text);
        assert_eq!(stats.char_count, 1099);
        assert_eq!(stats.word_count, 100);
        assert_eq!(stats.required_wpm, 11);
    }

    #[test]
    fn char_count_uses_characters_not_bytes() {
        let stats = compute_stats("caf\u{00E9}|na\u{00EF}ve");
        assert_eq!(stats.char_count, 10);
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn display_renders_three_lines() {
        let stats = TextStats {
            char_count: 109,
            word_count: 10,
            required_wpm: 2,
        };
        assert_eq!(
            stats.to_string(),
            "Char count: 109\nWord count: 10\nWPM required for 10 mins: 2"
        );
    }
}
