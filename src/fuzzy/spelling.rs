// File: src/fuzzy/spelling.rs
use std::collections::HashSet;

/// Produces alternative spellings of a word that a user may have meant.
///
/// Implementations return unique strings in a stable generation order;
/// callers may keep only a prefix of the list.
pub trait SpellingVariations: Send + Sync {
    fn variations(&self, word: &str) -> Vec<String>;
}

/// Default cap on how many variations one word may expand to. Each
/// ambiguous letter doubles the set, so long words must be cut off.
pub const DEFAULT_GENERATION_LIMIT: usize = 4096;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Spelling variations for Esperanto typed on keyboards without the
/// accented letters: every combination of c/ĉ, g/ĝ, h/ĥ, j/ĵ, s/ŝ, u/ŭ,
/// with x-system digraphs (`cx` for `ĉ`) understood, plus the same forms
/// with a nominal `o` ending when the word stops on a consonant.
#[derive(Debug, Clone)]
pub struct EsperantoSpelling {
    limit: usize,
}

impl Default for EsperantoSpelling {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATION_LIMIT)
    }
}

impl EsperantoSpelling {
    pub fn new(limit: usize) -> Self {
        Self { limit: limit.max(1) }
    }

    /// Letter alternatives at each position of the word. The first option
    /// is always the letter as typed, so the original word comes first.
    fn positions(word: &str) -> Vec<Vec<char>> {
        let mut positions = Vec::new();
        let mut chars = word.chars().peekable();

        while let Some(c) = chars.next() {
            let pair = diacritic_pair(c);
            if let Some((plain, accented)) = pair {
                if chars.peek() == Some(&'x') {
                    chars.next();
                    positions.push(vec![accented, plain]);
                    continue;
                }
                if c == accented {
                    positions.push(vec![accented, plain]);
                } else {
                    positions.push(vec![plain, accented]);
                }
            } else {
                positions.push(vec![c]);
            }
        }
        positions
    }

    /// Expands the per-position alternatives breadth first, one position at
    /// a time, truncating to the limit after every step.
    fn expand(&self, positions: &[Vec<char>]) -> Vec<String> {
        let mut current = vec![String::new()];

        for options in positions {
            let mut next = Vec::with_capacity((current.len() * options.len()).min(self.limit));
            'outer: for &option in options {
                for prefix in &current {
                    if next.len() == self.limit {
                        break 'outer;
                    }
                    let mut s = String::with_capacity(prefix.len() + option.len_utf8());
                    s.push_str(prefix);
                    s.push(option);
                    next.push(s);
                }
            }
            current = next;
        }
        current
    }
}

impl SpellingVariations for EsperantoSpelling {
    fn variations(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return vec![];
        }

        let mut variations = self.expand(&Self::positions(word));

        if !word.ends_with(|c: char| VOWELS.contains(&c) || c == '-') {
            let with_ending: Vec<String> = variations.iter().map(|v| format!("{v}o")).collect();
            variations.extend(with_ending);
        }

        let mut seen = HashSet::new();
        variations.retain(|v| seen.insert(v.clone()));
        variations.truncate(self.limit);
        variations
    }
}

/// The (plain, accented) pair a letter belongs to, if any.
fn diacritic_pair(c: char) -> Option<(char, char)> {
    match c {
        'c' | 'ĉ' => Some(('c', 'ĉ')),
        'g' | 'ĝ' => Some(('g', 'ĝ')),
        'h' | 'ĥ' => Some(('h', 'ĥ')),
        'j' | 'ĵ' => Some(('j', 'ĵ')),
        's' | 'ŝ' => Some(('s', 'ŝ')),
        'u' | 'ŭ' => Some(('u', 'ŭ')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_word_first() {
        let variations = EsperantoSpelling::default().variations("sxafo");
        assert_eq!(variations[0], "ŝafo");
    }

    #[test]
    fn test_diacritic_toggles() {
        let variations = EsperantoSpelling::default().variations("saf");
        for expected in ["saf", "ŝaf", "safo", "ŝafo"] {
            assert!(variations.contains(&expected.to_string()), "missing {expected}");
        }
        assert_eq!(variations.len(), 4);
    }

    #[test]
    fn test_x_system_digraphs() {
        let variations = EsperantoSpelling::default().variations("cxu");
        assert!(variations.contains(&"ĉu".to_string()));
        assert!(variations.contains(&"cŭ".to_string()));
        assert!(!variations.iter().any(|v| v.contains('x')));
    }

    #[test]
    fn test_missing_nominal_ending() {
        let variations = EsperantoSpelling::default().variations("ŝaf");
        assert!(variations.contains(&"ŝafo".to_string()));

        let variations = EsperantoSpelling::default().variations("domo");
        assert!(!variations.contains(&"domoo".to_string()));
    }

    #[test]
    fn test_unique() {
        let variations = EsperantoSpelling::default().variations("ŝuŝu");
        let unique: HashSet<_> = variations.iter().collect();
        assert_eq!(unique.len(), variations.len());
        assert_eq!(variations.len(), 16);
    }

    #[test]
    fn test_generation_is_bounded() {
        let word = "ĉsĝhĵu".repeat(4);
        let variations = EsperantoSpelling::new(1500).variations(&word);
        assert_eq!(variations.len(), 1500);
        assert_eq!(variations[0], word);
    }

    #[test]
    fn test_empty_word() {
        assert!(EsperantoSpelling::default().variations("").is_empty());
    }
}
