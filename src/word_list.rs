use crate::trie::Trie;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Words inserted by the demonstration driver
pub const SAMPLE_WORDS: [&str; 6] = ["notaword", "ucf", "no", "note", "corg", "joey"];

/// Word list with the line each word came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<(usize, String)>,
}

impl WordList {
    /// The built-in sample words
    pub fn sample() -> Self {
        Self {
            entries: SAMPLE_WORDS
                .iter()
                .enumerate()
                .map(|(i, word)| (i + 1, word.to_string()))
                .collect(),
        }
    }

    /// Loads a dictionary file, one word per line
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let list = Self::parse(&text);
        info!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Parses dictionary text. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let word = line.trim();
                if word.is_empty() || word.starts_with('#') {
                    None
                } else {
                    Some((i + 1, word.to_string()))
                }
            })
            .collect();
        Self { entries }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, word)| word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts every word into a fresh trie
    pub fn build_trie(&self) -> Result<Trie> {
        let mut trie = Trie::new();
        for (line, word) in &self.entries {
            trie.insert(word)
                .with_context(|| format!("Bad word on line {line}"))?;
        }
        debug!(
            words = trie.len(),
            nodes = trie.node_count(),
            "built trie"
        );
        Ok(trie)
    }
}
