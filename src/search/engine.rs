//! Read-only dictionary with anagram and containment queries

use crate::core::{LetterFrequency, Word, WordList};
use crate::error::Result;
use crate::index::{AnagramIndex, FrequencyRanking, build_index};
use crate::wordlists::loader;
use std::path::Path;

/// A loaded word list with every derived table built once
///
/// Holds the words, a letter frequency per word, the anagram index and its
/// ranking. Nothing is mutated after construction, so a `&Dictionary` can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: WordList,
    frequencies: Vec<LetterFrequency>,
    index: AnagramIndex,
    ranking: FrequencyRanking,
}

impl Dictionary {
    /// Build all derived tables for `words`
    #[must_use]
    pub fn new(words: WordList) -> Self {
        let frequencies = words.iter().map(Word::letter_frequency).collect();
        let (index, ranking) = build_index(&words);

        Self {
            words,
            frequencies,
            index,
            ranking,
        }
    }

    /// Load a word list file and build the dictionary
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn index(&self) -> &AnagramIndex {
        &self.index
    }

    #[must_use]
    pub const fn ranking(&self) -> &FrequencyRanking {
        &self.ranking
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Text of the word at `position`
    #[must_use]
    pub fn word(&self, position: usize) -> Option<&str> {
        self.words.get(position).map(Word::text)
    }

    /// True iff `word` is an entry of the dictionary
    ///
    /// `word` is normalized like a dictionary line before the lookup.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        let word = Word::new(word);
        self.index
            .positions(&word.signature())
            .iter()
            .any(|&position| self.word(position) == Some(word.text()))
    }

    /// All dictionary words that are anagrams of `query`, in load order
    ///
    /// The query is normalized like dictionary lines. The query itself is
    /// included when it is in the dictionary. An unknown signature yields an
    /// empty result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` for an empty or multi-word query.
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::WordList;
    /// use anagram_engine::search::Dictionary;
    ///
    /// let dict = Dictionary::new(WordList::from_lines(["bear", "bare", "arbe", "zzz"]));
    /// assert_eq!(dict.find_anagrams("Bear").unwrap(), vec!["bear", "bare", "arbe"]);
    /// assert!(dict.find_anagrams("zoo").unwrap().is_empty());
    /// ```
    pub fn find_anagrams(&self, query: &str) -> Result<Vec<&str>> {
        let word = Word::parse_query(query)?;
        Ok(self.resolve(self.index.positions(&word.signature())))
    }

    /// The `n` largest anagram groups, each listed in load order
    #[must_use]
    pub fn most_frequent(&self, n: usize) -> Vec<Vec<&str>> {
        self.ranking
            .top(&self.index, n)
            .map(|group| self.resolve(group.positions()))
            .collect()
    }

    /// Every word spelled from `query`'s letters, in load order
    ///
    /// Same result as [`crate::search::find_contained`], using the precomputed
    /// per-word frequencies.
    #[must_use]
    pub fn find_contained(&self, query: &LetterFrequency) -> Vec<&str> {
        self.contained_positions(query)
            .into_iter()
            .filter_map(|position| self.word(position))
            .collect()
    }

    /// Positions of every word spelled from `query`'s letters
    #[must_use]
    pub fn contained_positions(&self, query: &LetterFrequency) -> Vec<usize> {
        self.frequencies
            .iter()
            .enumerate()
            .filter(|(_, frequency)| query.covers(frequency))
            .map(|(position, _)| position)
            .collect()
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&str> {
        positions
            .iter()
            .filter_map(|&position| self.word(position))
            .collect()
    }
}
