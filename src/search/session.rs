//! Greedy letter-pool consumption
//!
//! A session starts from the letters of an input (usually a person's name) and
//! repeatedly picks a dictionary word that can be spelled from the remaining
//! letters, subtracting its letters, until the pool is empty or no word fits.

use super::{Dictionary, LetterPool, Strategy};
use crate::error::{AnagramError, Result};
use tracing::{debug, trace};

/// Inputs with fewer letters than this end the session before any search
pub const MIN_INPUT_LETTERS: usize = 2;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every letter was used
    Exhausted,
    /// Letters remain but no dictionary word can be spelled from them
    NoCandidates,
    /// The selection policy declined to choose
    Stopped,
}

/// Outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub input: String,
    pub chosen: Vec<String>,
    pub leftover: String,
    pub end: SessionEnd,
}

impl SessionResult {
    /// Chosen words joined into a phrase
    #[must_use]
    pub fn phrase(&self) -> String {
        self.chosen.join(" ")
    }

    /// Number of input letters consumed by the chosen words
    #[must_use]
    pub fn letters_used(&self) -> usize {
        self.chosen.iter().map(|w| w.chars().count()).sum()
    }
}

/// Mutable state of one selection session over a shared dictionary
///
/// The dictionary is only read; all mutation is local to the session.
#[derive(Debug, Clone)]
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    input: String,
    start_len: usize,
    pool: LetterPool,
    chosen: Vec<&'d str>,
}

impl<'d> Session<'d> {
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, input: &str) -> Self {
        let pool = LetterPool::from_input(input);
        Self {
            dictionary,
            input: input.to_string(),
            start_len: pool.len(),
            pool,
            chosen: Vec::new(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub fn chosen(&self) -> &[&'d str] {
        &self.chosen
    }

    /// Words that can be spelled from the remaining letters, in dictionary order
    ///
    /// Empty dictionary entries are never offered, so every choice shrinks the pool.
    /// An input shorter than `MIN_INPUT_LETTERS` offers nothing.
    #[must_use]
    pub fn candidates(&self) -> Vec<&'d str> {
        if self.pool.is_empty() || self.start_len < MIN_INPUT_LETTERS {
            return Vec::new();
        }
        let dictionary: &'d Dictionary = self.dictionary;
        dictionary
            .find_contained(&self.pool.frequency())
            .into_iter()
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Take `word` from the pool and append it to the chosen words
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if `word` is empty, is not a dictionary entry, or
    /// cannot be spelled from the remaining letters; the session is left unchanged.
    pub fn choose(&mut self, word: &'d str) -> Result<()> {
        if word.is_empty() {
            return Err(AnagramError::invalid_query(word, "cannot choose an empty word"));
        }
        if !self.dictionary.contains_word(word) {
            return Err(AnagramError::invalid_query(word, "word is not in the dictionary"));
        }
        if !self.pool.remove_word(word) {
            return Err(AnagramError::invalid_query(
                word,
                "word cannot be spelled from the remaining letters",
            ));
        }
        debug!(word, remaining = %self.pool, "word chosen");
        self.chosen.push(word);
        Ok(())
    }

    /// Give the letters of the last chosen word back to the pool
    ///
    /// Returns the word that was undone. The restored letters go to the end of the pool.
    pub fn undo(&mut self) -> Option<&'d str> {
        let word = self.chosen.pop()?;
        self.pool.restore(word);
        debug!(word, remaining = %self.pool, "choice undone");
        Some(word)
    }

    /// Run the greedy loop to completion with `strategy` choosing each word
    ///
    /// Terminates after at most as many iterations as the input has letters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection` if the strategy returns an index outside the
    /// candidate list.
    pub fn run<S: Strategy + ?Sized>(mut self, strategy: &mut S) -> Result<SessionResult> {
        let end = loop {
            if self.pool.is_empty() {
                break SessionEnd::Exhausted;
            }

            let candidates = self.candidates();
            trace!(remaining = %self.pool, candidates = candidates.len(), "session step");
            if candidates.is_empty() {
                break SessionEnd::NoCandidates;
            }

            let Some(index) = strategy.select(&candidates, &self.pool) else {
                break SessionEnd::Stopped;
            };
            let word = *candidates
                .get(index)
                .ok_or(AnagramError::InvalidSelection {
                    index,
                    available: candidates.len(),
                })?;
            self.choose(word)?;
        };

        Ok(self.finish(end))
    }

    /// Close the session and report what was chosen and what is left
    #[must_use]
    pub fn finish(self, end: SessionEnd) -> SessionResult {
        let result = SessionResult {
            input: self.input,
            chosen: self.chosen.iter().map(|w| (*w).to_string()).collect(),
            leftover: self.pool.remaining(),
            end,
        };
        debug!(
            input = %result.input,
            phrase = %result.phrase(),
            leftover = %result.leftover,
            ?end,
            "session finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterFrequency, WordList};
    use crate::search::{FirstMatchStrategy, LongestWordStrategy, RandomStrategy};

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(WordList::from_lines(words.iter().copied()))
    }

    /// Replays a fixed list of choices, then stops
    struct Scripted(Vec<usize>);

    impl Strategy for Scripted {
        fn select(&mut self, _candidates: &[&str], _pool: &LetterPool) -> Option<usize> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    #[test]
    fn anna_with_longest_word_uses_every_letter() {
        let dict = dictionary(&["an", "ann", "a"]);
        let result = Session::new(&dict, "anna")
            .run(&mut LongestWordStrategy)
            .unwrap();

        assert_eq!(result.chosen, vec!["ann", "a"]);
        assert_eq!(result.leftover, "");
        assert_eq!(result.end, SessionEnd::Exhausted);
    }

    #[test]
    fn anna_with_first_match() {
        let dict = dictionary(&["an", "ann", "a"]);
        let result = Session::new(&dict, "anna")
            .run(&mut FirstMatchStrategy)
            .unwrap();

        assert_eq!(result.chosen, vec!["an", "an"]);
        assert!(result.leftover.is_empty());
    }

    #[test]
    fn no_candidates_leaves_input_as_leftover() {
        let dict = dictionary(&["xyz"]);
        let result = Session::new(&dict, "abc").run(&mut FirstMatchStrategy).unwrap();

        assert!(result.chosen.is_empty());
        assert_eq!(result.leftover, "abc");
        assert_eq!(result.end, SessionEnd::NoCandidates);
    }

    #[test]
    fn empty_input_ends_immediately() {
        let dict = dictionary(&["a", "an"]);
        let result = Session::new(&dict, "").run(&mut FirstMatchStrategy).unwrap();

        assert!(result.chosen.is_empty());
        assert_eq!(result.leftover, "");
        assert_eq!(result.end, SessionEnd::Exhausted);
    }

    #[test]
    fn single_letter_input_ends_immediately() {
        let dict = dictionary(&["a", "an"]);
        let result = Session::new(&dict, " A! ").run(&mut FirstMatchStrategy).unwrap();

        assert!(result.chosen.is_empty());
        assert_eq!(result.leftover, "a");
        assert_eq!(result.end, SessionEnd::NoCandidates);
    }

    #[test]
    fn non_letters_are_ignored() {
        let dict = dictionary(&["held", "tony"]);
        let result = Session::new(&dict, "Tony-Held 42")
            .run(&mut FirstMatchStrategy)
            .unwrap();

        assert_eq!(result.chosen, vec!["held", "tony"]);
        assert_eq!(result.phrase(), "held tony");
        assert_eq!(result.letters_used(), 8);
    }

    #[test]
    fn unmatched_letters_surface_as_leftover() {
        let dict = dictionary(&["ant"]);
        let result = Session::new(&dict, "antq").run(&mut FirstMatchStrategy).unwrap();

        assert_eq!(result.chosen, vec!["ant"]);
        assert_eq!(result.leftover, "q");
        assert_eq!(result.end, SessionEnd::NoCandidates);
    }

    #[test]
    fn empty_dictionary_entries_are_never_candidates() {
        let dict = dictionary(&["", "a", ""]);
        let session = Session::new(&dict, "aa");
        assert_eq!(session.candidates(), vec!["a"]);

        let result = session.run(&mut FirstMatchStrategy).unwrap();
        assert_eq!(result.chosen, vec!["a", "a"]);
    }

    #[test]
    fn stopping_strategy_ends_session() {
        let dict = dictionary(&["an", "na"]);
        let result = Session::new(&dict, "anna").run(&mut Scripted(vec![1])).unwrap();

        assert_eq!(result.chosen, vec!["na"]);
        // Remaining letters keep their input order
        assert_eq!(result.leftover, "na");
        assert_eq!(result.end, SessionEnd::Stopped);
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let dict = dictionary(&["an"]);
        let err = Session::new(&dict, "anna")
            .run(&mut Scripted(vec![5]))
            .unwrap_err();

        assert!(matches!(
            err,
            AnagramError::InvalidSelection {
                index: 5,
                available: 1
            }
        ));
    }

    #[test]
    fn session_terminates_within_letter_count() {
        let dict = dictionary(&["a", "b", "ab", "ba", "c", "abc"]);
        let input = "abcabcab";
        let mut steps = 0;

        struct Counting<'a>(&'a mut usize);
        impl Strategy for Counting<'_> {
            fn select(&mut self, _c: &[&str], _p: &LetterPool) -> Option<usize> {
                *self.0 += 1;
                Some(0)
            }
        }

        let result = Session::new(&dict, input).run(&mut Counting(&mut steps)).unwrap();
        assert!(steps <= input.len());
        assert_eq!(result.chosen.len(), steps);
    }

    #[test]
    fn seeded_random_sessions_conserve_letters() {
        let dict = dictionary(&[
            "a", "an", "and", "on", "toy", "held", "hold", "the", "end", "tony", "lend", "den",
        ]);
        let input = "anthony edward held";

        for seed in 0..20 {
            let result = Session::new(&dict, input)
                .run(&mut RandomStrategy::seeded(seed))
                .unwrap();

            let mut used = LetterFrequency::of(&result.chosen.concat());
            used.extend(result.leftover.chars());
            assert_eq!(used, LetterFrequency::of_letters(input), "seed {seed}");
            for word in &result.chosen {
                assert!(dict.words().iter().any(|w| w.text() == word.as_str()));
            }
        }
    }

    #[test]
    fn seeded_random_sessions_are_reproducible() {
        let dict = dictionary(&["a", "an", "and", "on", "toy", "held", "the", "end", "tony"]);
        let run = |seed| {
            Session::new(&dict, "anthony edward held")
                .run(&mut RandomStrategy::seeded(seed))
                .unwrap()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn choose_rejects_unspellable_word() {
        let dict = dictionary(&["bear"]);
        let mut session = Session::new(&dict, "bare");

        assert!(session.choose("bears").is_err());
        assert!(session.choose("").is_err());
        assert_eq!(session.pool().remaining(), "bare");

        session.choose("bear").unwrap();
        assert!(session.pool().is_empty());
        assert_eq!(session.chosen(), &["bear"]);
    }

    #[test]
    fn choose_rejects_word_outside_dictionary() {
        let dict = dictionary(&["ann", "a"]);
        let mut session = Session::new(&dict, "anna");

        let err = session.choose("naan").unwrap_err();
        assert!(matches!(err, AnagramError::InvalidQuery { .. }));
        assert!(session.chosen().is_empty());
        assert_eq!(session.pool().remaining(), "anna");

        session.choose("ann").unwrap();
        assert_eq!(session.chosen(), &["ann"]);
    }

    #[test]
    fn undo_restores_letters() {
        let dict = dictionary(&["ann", "a"]);
        let mut session = Session::new(&dict, "anna");

        session.choose("ann").unwrap();
        assert_eq!(session.undo(), Some("ann"));
        assert_eq!(session.pool().frequency(), LetterFrequency::of("anna"));
        assert!(session.chosen().is_empty());
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn candidates_do_not_mutate_dictionary() {
        let dict = dictionary(&["an", "ann", "a"]);
        let before = dict.words().clone();

        let _ = Session::new(&dict, "anna").run(&mut LongestWordStrategy).unwrap();
        assert_eq!(dict.words(), &before);
    }
}
