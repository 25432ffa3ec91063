//! The working letter pool of a selection session

use crate::core::LetterFrequency;
use std::fmt;

/// Letters still available, in the order they appeared in the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Keep only the alphabetic characters of `input`, case-folded
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::search::LetterPool;
    ///
    /// let pool = LetterPool::from_input("Tony Held");
    /// assert_eq!(pool.remaining(), "tonyheld");
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self {
            letters: input
                .chars()
                .filter(|c| c.is_alphabetic())
                .flat_map(char::to_lowercase)
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The pool as a multiset
    #[must_use]
    pub fn frequency(&self) -> LetterFrequency {
        self.letters.iter().copied().collect()
    }

    /// True iff `word` can be spelled from the pool
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.frequency().covers(&LetterFrequency::of(word))
    }

    /// Remove one occurrence of each letter of `word`
    ///
    /// Returns `false` without touching the pool if `word` cannot be spelled from it.
    pub fn remove_word(&mut self, word: &str) -> bool {
        if !self.can_spell(word) {
            return false;
        }
        for letter in word.chars() {
            if let Some(position) = self.letters.iter().position(|&c| c == letter) {
                self.letters.remove(position);
            }
        }
        true
    }

    /// Give the letters of `word` back, appended after the remaining letters
    pub(crate) fn restore(&mut self, word: &str) {
        self.letters.extend(word.chars());
    }

    /// Remaining letters as a string
    #[must_use]
    pub fn remaining(&self) -> String {
        self.letters.iter().collect()
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.remaining())
    }
}
