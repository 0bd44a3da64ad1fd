// File: src/core/morphology.rs
use crate::core::trie::MorphemeTrie;
use crate::core::types::Segmentation;

/// Only the two most plausible parses are worth showing.
pub const MAX_SEGMENTATIONS: usize = 2;

/// Upper bound on parses enumerated for one word.
const MAX_PARSES: usize = 64;

/// Splits a word into known morphemes.
pub trait Segmenter: Send + Sync {
    /// Candidate decompositions, most likely first.
    fn segment(&self, word: &str) -> Vec<Segmentation>;
}

// Affixes and grammatical endings, always known to the segmenter.
const PREFIXES: &[&str] = &["bo", "dis", "ek", "eks", "fi", "ge", "mal", "pra", "re"];
const SUFFIXES: &[&str] = &[
    "aĉ", "ad", "aĵ", "an", "ar", "ebl", "ec", "eg", "ej", "em", "end", "er", "estr", "et", "id",
    "ig", "iĝ", "il", "in", "ind", "ing", "ism", "ist", "obl", "on", "op", "uj", "ul", "um",
];
const ENDINGS: &[&str] = &["o", "a", "e", "i", "j", "n", "as", "is", "os", "us", "u"];

/// Ranks complete decompositions of a word over a morpheme inventory:
/// fewer morphemes first, then more of the word carried by roots and
/// affixes rather than grammatical endings.
#[derive(Debug, Clone)]
pub struct MorphemeSegmenter {
    trie: MorphemeTrie,
}

impl MorphemeSegmenter {
    /// Builds a segmenter from dictionary roots plus the built-in affixes.
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = MorphemeTrie::new();
        for affix in PREFIXES.iter().chain(SUFFIXES).chain(ENDINGS) {
            trie.insert(affix);
        }
        for root in roots {
            trie.insert(&root.as_ref().to_lowercase());
        }
        Self { trie }
    }

    pub fn morpheme_count(&self) -> usize {
        self.trie.len()
    }

    /// `finishes[i]` is true when `chars[i..]` splits completely into
    /// known morphemes. Lets enumeration skip dead ends entirely.
    fn completions(&self, chars: &[char]) -> Vec<bool> {
        let mut finishes = vec![false; chars.len() + 1];
        finishes[chars.len()] = true;
        for start in (0..chars.len()).rev() {
            finishes[start] = self
                .trie
                .prefix_ends(chars, start)
                .into_iter()
                .any(|end| finishes[end]);
        }
        finishes
    }

    fn enumerate(
        &self,
        chars: &[char],
        finishes: &[bool],
        start: usize,
        path: &mut Vec<String>,
        out: &mut Vec<Segmentation>,
    ) {
        if out.len() >= MAX_PARSES {
            return;
        }
        if start == chars.len() {
            out.push(path.clone());
            return;
        }
        for end in self.trie.prefix_ends(chars, start) {
            if !finishes[end] {
                continue;
            }
            path.push(chars[start..end].iter().collect());
            self.enumerate(chars, finishes, end, path, out);
            path.pop();
        }
    }
}

impl Segmenter for MorphemeSegmenter {
    fn segment(&self, word: &str) -> Vec<Segmentation> {
        let word = word.trim_start_matches('-').to_lowercase();
        if word.is_empty() {
            return vec![];
        }
        let chars: Vec<char> = word.chars().collect();
        let finishes = self.completions(&chars);
        let mut parses = Vec::new();
        if finishes[0] {
            self.enumerate(&chars, &finishes, 0, &mut Vec::new(), &mut parses);
        }

        // Stable: discovery order (longest prefix first) breaks remaining ties.
        parses.sort_by_key(|parse| (parse.len(), std::cmp::Reverse(content_chars(parse))));
        parses
    }
}

fn content_chars(parse: &[String]) -> usize {
    parse
        .iter()
        .filter(|m| !ENDINGS.contains(&m.as_str()))
        .map(|m| m.chars().count())
        .sum()
}

/// The most likely segmentations of `key`, at most [`MAX_SEGMENTATIONS`].
pub fn top_segmentations(segmenter: &dyn Segmenter, key: &str) -> Vec<Segmentation> {
    if key.is_empty() {
        return vec![];
    }
    let mut parses = segmenter.segment(key);
    parses.truncate(MAX_SEGMENTATIONS);
    parses
}
