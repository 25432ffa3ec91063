//! Core domain types for anagram search
//!
//! Words, their canonical signatures and letter multisets. These types are pure
//! and immutable once built; nothing here performs I/O.

mod frequency;
mod signature;
mod word;
mod word_list;

pub use frequency::LetterFrequency;
pub use signature::Signature;
pub use word::Word;
pub use word_list::WordList;
