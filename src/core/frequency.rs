//! Letter multisets for containment tests

use rustc_hash::FxHashMap;

/// Occurrence count of each character in a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterFrequency {
    /// Count every character of `text`, as-is
    #[must_use]
    pub fn of(text: &str) -> Self {
        text.chars().collect()
    }

    /// Count only the alphabetic characters of `text`, case-folded
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::LetterFrequency;
    ///
    /// let letters = LetterFrequency::of_letters("Tony Held!");
    /// assert_eq!(letters.total(), 8);
    /// assert_eq!(letters.count('t'), 1);
    /// assert_eq!(letters.count(' '), 0);
    /// ```
    #[must_use]
    pub fn of_letters(text: &str) -> Self {
        text.chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct characters
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True iff every character of `other` occurs here at least as often
    ///
    /// This is the multiset-subset test: `self` covers `other`.
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::LetterFrequency;
    ///
    /// let pool = LetterFrequency::of("bare");
    /// assert!(pool.covers(&LetterFrequency::of("bear")));
    /// assert!(!pool.covers(&LetterFrequency::of("bears")));
    /// ```
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        if other.total > self.total {
            return false;
        }
        other
            .counts
            .iter()
            .all(|(letter, &needed)| self.count(*letter) >= needed)
    }

    /// Add one occurrence of `letter`
    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the counts unchanged) if the letter is absent.
    pub fn remove(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.counts.remove(&letter);
            }
            None => return false,
        }
        self.total -= 1;
        true
    }

    /// Characters and counts, sorted by character
    #[must_use]
    pub fn sorted_counts(&self) -> Vec<(char, u32)> {
        let mut counts: Vec<(char, u32)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        counts.sort_unstable();
        counts
    }
}

impl FromIterator<char> for LetterFrequency {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut frequency = Self::default();
        frequency.extend(iter);
        frequency
    }
}

impl Extend<char> for LetterFrequency {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for letter in iter {
            self.add(letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let freq = LetterFrequency::of("anna");
        assert_eq!(freq.count('a'), 2);
        assert_eq!(freq.count('n'), 2);
        assert_eq!(freq.count('z'), 0);
        assert_eq!(freq.total(), 4);
        assert_eq!(freq.distinct(), 2);
    }

    #[test]
    fn of_letters_drops_non_alphabetic_and_folds_case() {
        let freq = LetterFrequency::of_letters("Ryan Adamson-Meek 3");
        assert_eq!(freq, LetterFrequency::of("ryanadamsonmeek"));
    }

    #[test]
    fn covers_bear_bare() {
        assert!(LetterFrequency::of("bare").covers(&LetterFrequency::of("bear")));
        assert!(!LetterFrequency::of("bare").covers(&LetterFrequency::of("bears")));
    }

    #[test]
    fn covers_needs_enough_repeats() {
        let pool = LetterFrequency::of("ana");
        assert!(pool.covers(&LetterFrequency::of("an")));
        assert!(!pool.covers(&LetterFrequency::of("ann")));
    }

    #[test]
    fn covers_is_reflexive() {
        for word in ["", "a", "bear", "polyglot", "mississippi"] {
            let freq = LetterFrequency::of(word);
            assert!(freq.covers(&freq), "{word} should cover itself");
        }
    }

    #[test]
    fn covers_is_monotonic_in_the_pool() {
        let word = LetterFrequency::of("stale");
        let mut pool = LetterFrequency::of("least");
        assert!(pool.covers(&word));

        pool.extend("xyzzy".chars());
        assert!(pool.covers(&word));
    }

    #[test]
    fn empty_is_covered_by_anything() {
        assert!(LetterFrequency::default().covers(&LetterFrequency::default()));
        assert!(LetterFrequency::of("abc").covers(&LetterFrequency::default()));
        assert!(!LetterFrequency::default().covers(&LetterFrequency::of("a")));
    }

    #[test]
    fn remove_decrements_and_drops_zero_counts() {
        let mut freq = LetterFrequency::of("aab");
        assert!(freq.remove('a'));
        assert_eq!(freq.count('a'), 1);
        assert!(freq.remove('a'));
        assert_eq!(freq.count('a'), 0);
        assert_eq!(freq.distinct(), 1);
        assert!(!freq.remove('a'));
        assert_eq!(freq.total(), 1);
    }

    #[test]
    fn remove_restores_equality() {
        let mut freq = LetterFrequency::of("bears");
        assert!(freq.remove('s'));
        assert_eq!(freq, LetterFrequency::of("bear"));
    }

    #[test]
    fn sorted_counts_are_ordered() {
        let freq = LetterFrequency::of("held");
        assert_eq!(
            freq.sorted_counts(),
            vec![('d', 1), ('e', 1), ('h', 1), ('l', 1)]
        );
    }
}
