//! Word lists for anagram search
//!
//! Provides the embedded default dictionary and loaders for external word lists.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_are_not_blank() {
        for &word in DEFAULT_WORDS {
            assert!(!word.trim().is_empty(), "blank entry in bundled list");
        }
    }

    #[test]
    fn default_words_contain_known_anagrams() {
        for expected in ["bear", "bare", "listen", "silent"] {
            assert!(
                DEFAULT_WORDS.contains(&expected),
                "'{expected}' missing from bundled list"
            );
        }
    }
}
