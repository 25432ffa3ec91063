//! Dictionary word representation
//!
//! A Word is one normalized line of a word list: surrounding whitespace removed and lowercased.

use super::{LetterFrequency, Signature};
use crate::error::{AnagramError, Result};
use std::fmt;

/// A normalized dictionary word
///
/// Empty words are representable: a word list keeps blank lines unless the caller filters them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a word from one raw line, trimming and lowercasing it
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::Word;
    ///
    /// let word = Word::new("  Bear\r\n");
    /// assert_eq!(word.text(), "bear");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_lowercase(),
        }
    }

    /// Normalize a user query into a word
    ///
    /// # Errors
    /// Returns `InvalidQuery` if the trimmed query is empty or still contains
    /// whitespace or control characters.
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::Word;
    ///
    /// assert_eq!(Word::parse_query(" Polyglot ").unwrap().text(), "polyglot");
    /// assert!(Word::parse_query("   ").is_err());
    /// assert!(Word::parse_query("two words").is_err());
    /// ```
    pub fn parse_query(raw: &str) -> Result<Self> {
        let word = Self::new(raw);

        if word.is_empty() {
            return Err(AnagramError::invalid_query(raw, "query is empty"));
        }

        if word
            .text
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(AnagramError::invalid_query(
                raw,
                "query must be a single word",
            ));
        }

        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters (not bytes)
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Canonical sorted-letter key shared by all anagrams of this word
    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature::of(&self.text)
    }

    /// Occurrence count of every character in the word
    #[must_use]
    pub fn letter_frequency(&self) -> LetterFrequency {
        LetterFrequency::of(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
