//! Anagram Engine
//!
//! An inverted anagram index over a flat word list, multiset containment search,
//! and a greedy session that turns a name into a phrase of dictionary words.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_engine::core::{LetterFrequency, WordList};
//! use anagram_engine::search::{Dictionary, LongestWordStrategy, Session};
//!
//! let dict = Dictionary::new(WordList::from_lines(["bear", "bare", "an", "ann", "a"]));
//!
//! // Exact anagrams, in load order
//! assert_eq!(dict.find_anagrams("bear").unwrap(), vec!["bear", "bare"]);
//!
//! // Words spelled from a pool of letters
//! assert_eq!(dict.find_contained(&LetterFrequency::of("anna")), vec!["an", "ann", "a"]);
//!
//! // Greedy letter-pool consumption
//! let result = Session::new(&dict, "Anna").run(&mut LongestWordStrategy).unwrap();
//! assert_eq!(result.chosen, vec!["ann", "a"]);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Anagram index
pub mod index;

// Containment search and selection sessions
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{AnagramError, Result};
