//! Ordered word lists

use super::Word;

/// An ordered sequence of words with indices stable from load order
///
/// Duplicates and empty entries are kept; `without_empty` is an opt-in filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build a list from raw lines, normalizing each one
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::WordList;
    ///
    /// let list = WordList::from_lines(["Bear", "bare ", ""]);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(1).unwrap().text(), "bare");
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().map(|line| Word::new(line.as_ref())).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Word> {
        self.words.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Drop empty entries, keeping the order of the rest
    #[must_use]
    pub fn without_empty(self) -> Self {
        self.words.into_iter().filter(|w| !w.is_empty()).collect()
    }

    /// Number of empty entries
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_empty()).count()
    }

    /// The first `n` entries
    #[must_use]
    pub fn head(&self, n: usize) -> &[Word] {
        &self.words[..n.min(self.words.len())]
    }

    /// The last `n` entries
    #[must_use]
    pub fn tail(&self, n: usize) -> &[Word] {
        &self.words[self.words.len().saturating_sub(n)..]
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
