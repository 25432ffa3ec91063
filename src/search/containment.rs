//! Multiset containment: which words can be spelled from a pool of letters

use crate::core::{LetterFrequency, WordList};

/// True iff every letter of `candidate` is available in `query` often enough
///
/// Letters may appear anywhere and in any order in the query; this is not a
/// substring test.
///
/// # Examples
/// ```
/// use anagram_engine::core::LetterFrequency;
/// use anagram_engine::search::contains;
///
/// assert!(contains("bear", &LetterFrequency::of("bare")));
/// assert!(!contains("bears", &LetterFrequency::of("bare")));
/// ```
#[must_use]
pub fn contains(candidate: &str, query: &LetterFrequency) -> bool {
    query.covers(&LetterFrequency::of(candidate))
}

/// Every word of `words` contained in `query`, in word list order
///
/// Linear in the dictionary size; fine for word lists of tens of thousands of entries.
#[must_use]
pub fn find_contained<'a>(words: &'a WordList, query: &LetterFrequency) -> Vec<&'a str> {
    words
        .iter()
        .map(crate::core::Word::text)
        .filter(|candidate| contains(candidate, query))
        .collect()
}
