//! Signature-keyed inverted index over a word list

use crate::core::{Signature, WordList};
use rustc_hash::FxHashMap;

/// All positions in a word list that share one signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramGroup {
    signature: Signature,
    positions: Vec<usize>,
}

impl AnagramGroup {
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Word list positions in ascending (load) order
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Mapping from signature to the word list positions sharing it
///
/// Groups are stored in first-encountered order; the hash map only points at slots.
/// Once built from a word list, every position appears in exactly one group.
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    slots: FxHashMap<Signature, usize>,
    groups: Vec<AnagramGroup>,
    indexed: usize,
}

impl AnagramIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every word of `words` by its signature
    #[must_use]
    pub fn from_words(words: &WordList) -> Self {
        let mut index = Self::new();
        for (position, word) in words.iter().enumerate() {
            index.insert(word.signature(), position);
        }
        index
    }

    /// Append `position` to the group for `signature`, creating the group if absent
    pub fn insert(&mut self, signature: Signature, position: usize) {
        match self.slots.get(&signature) {
            Some(&slot) => self.groups[slot].positions.push(position),
            None => {
                self.slots.insert(signature.clone(), self.groups.len());
                self.groups.push(AnagramGroup {
                    signature,
                    positions: vec![position],
                });
            }
        }
        self.indexed += 1;
    }

    #[must_use]
    pub fn get(&self, signature: &Signature) -> Option<&AnagramGroup> {
        self.slots.get(signature).map(|&slot| &self.groups[slot])
    }

    /// Positions for `signature`, empty if the signature was never indexed
    #[must_use]
    pub fn positions(&self, signature: &Signature) -> &[usize] {
        match self.get(signature) {
            Some(group) => group.positions(),
            None => &[],
        }
    }

    /// All groups in first-encountered order
    #[must_use]
    pub fn groups(&self) -> &[AnagramGroup] {
        &self.groups
    }

    /// Number of distinct signatures
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of positions inserted
    #[must_use]
    pub const fn indexed_count(&self) -> usize {
        self.indexed
    }
}
