//! Anagram and containment search
//!
//! The read-only `Dictionary`, containment queries, and the greedy selection
//! session with its pluggable strategies.

mod containment;
mod engine;
mod pool;
pub mod session;
pub mod strategy;

pub use containment::{contains, find_contained};
pub use engine::Dictionary;
pub use pool::LetterPool;
pub use session::{Session, SessionEnd, SessionResult};
pub use strategy::{
    FirstMatchStrategy, LongestWordStrategy, RandomStrategy, Strategy, StrategyType,
};
