// --- File: src/core/trie.rs
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<char, usize>,
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), terminal: false }
    }
}

/// A character trie over known morphemes, stored as a flat node arena.
/// Used to find every morpheme that starts at a given position of a word.
#[derive(Clone, Debug)]
pub struct MorphemeTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for MorphemeTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphemeTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], len: 0 }
    }

    /// Number of distinct morphemes stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// O(k) where k is the morpheme length. Empty strings are ignored.
    pub fn insert(&mut self, morpheme: &str) {
        if morpheme.is_empty() {
            return;
        }
        let mut node_idx = 0;
        for c in morpheme.chars() {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].children.insert(c, new_node_id);
                    new_node_id
                }
            };
        }
        if !self.nodes[node_idx].terminal {
            self.nodes[node_idx].terminal = true;
            self.len += 1;
        }
    }

    pub fn contains(&self, morpheme: &str) -> bool {
        let mut node_idx = 0;
        for c in morpheme.chars() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next_idx) => node_idx = next_idx,
                None => return false,
            }
        }
        !morpheme.is_empty() && self.nodes[node_idx].terminal
    }

    /// End offsets (exclusive, in chars) of every morpheme that matches
    /// `chars[start..]` as a prefix, longest first.
    pub fn prefix_ends(&self, chars: &[char], start: usize) -> Vec<usize> {
        let mut ends = Vec::new();
        let mut node_idx = 0;
        for (offset, c) in chars[start..].iter().enumerate() {
            match self.nodes[node_idx].children.get(c) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if self.nodes[node_idx].terminal {
                ends.push(start + offset + 1);
            }
        }
        ends.reverse();
        ends
    }
}
