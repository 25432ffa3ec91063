//! Candidate selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::LetterPool;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A policy for picking the next word of a selection session
pub trait Strategy {
    /// Select one of `candidates`, all of which can be spelled from `pool`
    ///
    /// Returns the index of the chosen candidate, or `None` to stop the session.
    /// Never called with an empty candidate list.
    fn select(&mut self, candidates: &[&str], pool: &LetterPool) -> Option<usize>;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn select(&mut self, candidates: &[&str], pool: &LetterPool) -> Option<usize> {
        (**self).select(candidates, pool)
    }
}

/// Enum wrapper for all built-in strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Always the first candidate in dictionary order
    First(FirstMatchStrategy),
    /// The longest candidate, ties to the first
    Longest(LongestWordStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select(&mut self, candidates: &[&str], pool: &LetterPool) -> Option<usize> {
        match self {
            Self::First(s) => s.select(candidates, pool),
            Self::Longest(s) => s.select(candidates, pool),
            Self::Random(s) => s.select(candidates, pool),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "longest", "random". Defaults to random if
    /// name is unrecognized. `seed` only affects the random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "first" => Self::First(FirstMatchStrategy),
            "longest" => Self::Longest(LongestWordStrategy),
            other => {
                if other != "random" {
                    tracing::warn!(strategy = other, "unknown strategy, using random");
                }
                Self::Random(seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded))
            }
        }
    }

    /// Names accepted by `from_name`
    pub const NAMES: [&'static str; 3] = ["first", "longest", "random"];
}

/// Deterministic strategy: first candidate in dictionary order
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatchStrategy;

impl Strategy for FirstMatchStrategy {
    fn select(&mut self, candidates: &[&str], _pool: &LetterPool) -> Option<usize> {
        if candidates.is_empty() { None } else { Some(0) }
    }
}

/// Deterministic strategy: consume as many letters per step as possible
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestWordStrategy;

impl Strategy for LongestWordStrategy {
    fn select(&mut self, candidates: &[&str], _pool: &LetterPool) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (i, word)| {
                let len = word.chars().count();
                match best {
                    Some((_, best_len)) if best_len >= len => best,
                    _ => Some((i, len)),
                }
            })
            .map(|(i, _)| i)
    }
}

/// Random strategy
///
/// Owns its generator, so a seeded instance replays the same choices.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Random strategy seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible random strategy
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select(&mut self, candidates: &[&str], _pool: &LetterPool) -> Option<usize> {
        if candidates.is_empty() {
            None
        } else {
            Some(self.rng.random_range(0..candidates.len()))
        }
    }
}
