use crate::error::TrieError;
use tracing::{debug, trace};

const ALPHABET_SIZE: usize = 26;

/// Index of a node inside the trie's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone, Default)]
struct TrieNode {
    ends_word: bool,
    children: [Option<NodeId>; ALPHABET_SIZE],
}

impl TrieNode {
    fn new() -> Self {
        Self::default()
    }

    fn child(&self, letter: u8) -> Option<NodeId> {
        self.children[slot(letter)]
    }

    /// Occupied child slots, `a` first
    fn branches(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.map(|id| (b'a' + i as u8, id)))
    }
}

fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Checks that `word` is a non-empty run of `a`-`z`
pub fn validate_word(word: &str) -> Result<(), TrieError> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }
    match word.chars().enumerate().find(|(_, c)| !c.is_ascii_lowercase()) {
        Some((position, found)) => Err(TrieError::InvalidInput {
            word: word.to_string(),
            position,
            found,
        }),
        None => Ok(()),
    }
}

/// Prefix tree over lowercase ASCII words.
///
/// Nodes live in a single arena and refer to their children by index, so the
/// trie owns every node outright and the parent-to-child shape can't form a
/// cycle. The root is always the first node.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates an empty trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            words: 0,
        }
    }

    /// Builds a trie from `words`, stopping at the first invalid one
    pub fn from_words<I, S>(words: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Inserts `word`, returning `true` if it wasn't already present.
    ///
    /// The word is validated and node storage reserved before anything is
    /// touched, so a failed insert leaves the trie as it was.
    pub fn insert(&mut self, word: &str) -> Result<bool, TrieError> {
        validate_word(word)?;
        self.reserve_nodes(word.len())?;

        let mut node = ROOT;
        for letter in word.bytes() {
            node = match self.nodes[node.0].child(letter) {
                Some(child) => child,
                None => self.attach(node, letter),
            };
        }

        let terminal = &mut self.nodes[node.0];
        let added = !terminal.ends_word;
        terminal.ends_word = true;
        if added {
            self.words += 1;
        }
        trace!(word, added, "inserted");
        Ok(added)
    }

    /// Reports whether `word` was inserted as a complete word
    pub fn lookup(&self, word: &str) -> bool {
        self.find(word)
            .is_some_and(|node| self.nodes[node.0].ends_word)
    }

    /// Whether the path for `prefix` exists. The empty prefix is the root's
    /// path, so it exists even in an empty trie.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Gets inserted words starting with prefix, in alphabetical order
    pub fn words_starting_with(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(node) = self.find(prefix) {
            self.collect_words(node, prefix, &mut results);
        }
        results
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Tears the trie down and returns how many nodes were released.
    ///
    /// The count comes from a post-order walk over the nodes reachable from
    /// the root; the arena holding them is then freed in one go. Consuming
    /// `self` rules out any use of the trie afterwards.
    pub fn destroy(self) -> usize {
        let Trie { nodes, words } = self;
        let mut released = 0;
        let mut stack = vec![(ROOT, false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                released += 1;
                continue;
            }
            stack.push((node, true));
            stack.extend(nodes[node.0].branches().map(|(_, child)| (child, false)));
        }
        drop(nodes);

        debug!(released, words, "trie destroyed");
        released
    }

    /// Makes room for `requested` more nodes without touching the tree
    fn reserve_nodes(&mut self, requested: usize) -> Result<(), TrieError> {
        self.nodes
            .try_reserve(requested)
            .map_err(|_| TrieError::ResourceExhausted { requested })
    }

    fn attach(&mut self, parent: NodeId, letter: u8) -> NodeId {
        let child = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new());
        self.nodes[parent.0].children[slot(letter)] = Some(child);
        child
    }

    /// Follows `path` from the root; `None` once a letter has no child
    fn find(&self, path: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for letter in path.bytes() {
            if !letter.is_ascii_lowercase() {
                return None;
            }
            node = self.nodes[node.0].child(letter)?;
        }
        Some(node)
    }

    /// Depth-first walk below `start` with an explicit stack, so word length
    /// is bounded by memory rather than call depth. Each entry carries the
    /// buffer length to cut back to before its letter is appended.
    fn collect_words(&self, start: NodeId, prefix: &str, results: &mut Vec<String>) {
        let mut buffer = prefix.to_string();
        let mut stack = vec![(start, None, buffer.len())];

        while let Some((node, letter, depth)) = stack.pop() {
            buffer.truncate(depth);
            if let Some(letter) = letter {
                buffer.push(letter as char);
            }

            let node = &self.nodes[node.0];
            if node.ends_word {
                results.push(buffer.clone());
            }

            // reversed so `a` is popped first
            let depth = buffer.len();
            let branches: Vec<_> = node.branches().collect();
            stack.extend(
                branches
                    .into_iter()
                    .rev()
                    .map(|(letter, child)| (child, Some(letter), depth)),
            );
        }
    }
}
