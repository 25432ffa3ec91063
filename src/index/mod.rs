//! Exact-anagram index
//!
//! Groups word list positions by signature and ranks the groups by size.

mod anagram;
mod ranking;

pub use anagram::{AnagramGroup, AnagramIndex};
pub use ranking::FrequencyRanking;

use crate::core::WordList;
use tracing::debug;

/// Build the anagram index and its size ranking from a word list
///
/// # Examples
/// ```
/// use anagram_engine::core::{Signature, WordList};
/// use anagram_engine::index::build_index;
///
/// let words = WordList::from_lines(["bear", "bare", "zzz"]);
/// let (index, ranking) = build_index(&words);
///
/// assert_eq!(index.positions(&Signature::of("bear")), &[0, 1]);
/// assert_eq!(ranking.len(), 2);
/// ```
#[must_use]
pub fn build_index(words: &WordList) -> (AnagramIndex, FrequencyRanking) {
    let index = AnagramIndex::from_words(words);
    let ranking = FrequencyRanking::from_index(&index);

    debug!(
        words = words.len(),
        groups = index.group_count(),
        largest = ranking.top(&index, 1).next().map_or(0, AnagramGroup::len),
        "anagram index built"
    );

    (index, ranking)
}
