//! Prefix tree over lowercase ASCII words with exact-match lookup.

pub mod error;
pub mod trie;
pub mod word_list;

pub use error::TrieError;
pub use trie::{Trie, validate_word};
pub use word_list::{SAMPLE_WORDS, WordList};
