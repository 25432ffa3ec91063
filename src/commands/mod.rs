//! Command implementations

pub mod anagrams;
pub mod batch;
pub mod contained;
pub mod frequent;
pub mod info;
pub mod name;
pub mod simple;

pub use anagrams::{AnagramReport, find_anagram_reports};
pub use batch::{BatchStatistics, run_batch};
pub use contained::{ContainedReport, find_contained_words};
pub use frequent::{GroupReport, RankingReport, rank_groups};
pub use info::{DictionarySummary, summarize};
pub use name::{SessionConfig, run_session};
pub use simple::PromptStrategy;
