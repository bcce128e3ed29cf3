use thiserror::Error;

/// Errors raised by trie mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("word is empty")]
    EmptyWord,
    #[error("invalid character {found:?} at position {position} in `{word}` (expected a-z)")]
    InvalidInput {
        word: String,
        position: usize,
        found: char,
    },
    #[error("could not allocate {requested} trie nodes")]
    ResourceExhausted { requested: usize },
}
