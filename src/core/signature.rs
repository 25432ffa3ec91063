//! Canonical anagram key

use std::fmt;

/// The sorted characters of a word
///
/// Two words share a signature iff they are anagrams of one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of already-normalized text
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::Signature;
    ///
    /// assert_eq!(Signature::of("bear").as_str(), "aber");
    /// assert_eq!(Signature::of("bear"), Signature::of("bare"));
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut chars: Vec<char> = text.chars().collect();
        chars.sort();
        Self(chars.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the signature
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
