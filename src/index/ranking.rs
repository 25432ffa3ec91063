//! Anagram groups ranked by size

use super::{AnagramGroup, AnagramIndex};
use std::cmp::Reverse;

/// Group slots of an index, largest group first
///
/// Equal-size groups keep first-encountered order (the sort is stable).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyRanking {
    order: Vec<usize>,
}

impl FrequencyRanking {
    #[must_use]
    pub fn from_index(index: &AnagramIndex) -> Self {
        let mut order: Vec<usize> = (0..index.group_count()).collect();
        order.sort_by_key(|&slot| Reverse(index.groups()[slot].len()));
        Self { order }
    }

    /// Group slots in ranked order
    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `n` largest groups of `index`
    ///
    /// `index` must be the one this ranking was built from.
    pub fn top<'a>(
        &'a self,
        index: &'a AnagramIndex,
        n: usize,
    ) -> impl Iterator<Item = &'a AnagramGroup> + 'a {
        self.order
            .iter()
            .take(n)
            .filter_map(|&slot| index.groups().get(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;

    fn ranked_signatures(list: &[&str], n: usize) -> Vec<String> {
        let index = AnagramIndex::from_words(&WordList::from_lines(list.iter().copied()));
        let ranking = FrequencyRanking::from_index(&index);
        ranking
            .top(&index, n)
            .map(|g| g.signature().to_string())
            .collect()
    }

    #[test]
    fn largest_group_first() {
        let ranked = ranked_signatures(&["zzz", "rat", "tar", "art", "bear", "bare"], 3);
        assert_eq!(ranked, vec!["art", "aber", "zzz"]);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let ranked = ranked_signatures(&["dog", "cat", "god", "act", "emu"], 10);
        assert_eq!(ranked, vec!["dgo", "act", "emu"]);
    }

    #[test]
    fn top_is_clamped_to_group_count() {
        assert_eq!(ranked_signatures(&["a", "b"], 10).len(), 2);
        assert!(ranked_signatures(&[], 5).is_empty());
    }

    #[test]
    fn ranking_is_reproducible() {
        let list = ["stone", "notes", "a", "tones", "b", "rat", "tar"];
        assert_eq!(ranked_signatures(&list, 7), ranked_signatures(&list, 7));
    }

    #[test]
    fn ranking_covers_every_group() {
        let index = AnagramIndex::from_words(&WordList::from_lines(["a", "b", "a"]));
        let ranking = FrequencyRanking::from_index(&index);
        assert_eq!(ranking.len(), index.group_count());
        assert!(!ranking.is_empty());
        assert_eq!(ranking.slots(), &[0, 1]);
    }
}
