// File: src/core/collation.rs
use crate::core::types::Headword;
use std::cmp::Ordering;

/// A total order over strings in the dictionary's alphabet.
pub trait Collator: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Esperanto alphabetical order. Letters with a circumflex or breve sort
/// directly after their base letter; q, w, x and y sit where they do in
/// the Latin alphabet so foreign words still get a sensible place.
const ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ĉ', 'd', 'e', 'f', 'g', 'ĝ', 'h', 'ĥ', 'i', 'j', 'ĵ', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 'ŝ', 't', 'u', 'ŭ', 'v', 'w', 'x', 'y', 'z',
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EsperantoCollator;

impl EsperantoCollator {
    pub fn new() -> Self {
        Self
    }

    /// Primary sort key of a single character: separators, then letters in
    /// alphabet order, then everything else by codepoint.
    fn rank(c: char) -> (u8, u32) {
        let lower = c.to_lowercase().next().unwrap_or(c);
        if let Some(pos) = ALPHABET.iter().position(|&l| l == lower) {
            (1, pos as u32)
        } else if lower.is_whitespace() || lower == '-' || lower == '\'' {
            (0, lower as u32)
        } else {
            (2, lower as u32)
        }
    }
}

impl Collator for EsperantoCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary = a.chars().map(Self::rank).cmp(b.chars().map(Self::rank));
        if primary != Ordering::Equal {
            return primary;
        }

        // Same letters: lower case wins at the first position that differs in case.
        for (x, y) in a.chars().zip(b.chars()) {
            match (x.is_uppercase(), y.is_uppercase()) {
                (false, true) => return Ordering::Less,
                (true, false) => return Ordering::Greater,
                _ => {}
            }
        }

        a.cmp(b)
    }
}

/// Stable sort of headwords by their canonical spelling.
pub fn sort_headwords(words: &mut [Headword], collator: &dyn Collator) {
    words.sort_by(|x, y| collator.compare(&x.word, &y.word));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let collator = EsperantoCollator::new();
        let mut words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        words.sort_by(|a, b| collator.compare(a, b));
        words
    }

    #[test]
    fn test_diacritics_follow_base_letter() {
        assert_eq!(
            sorted(&["ĉapelo", "dento", "ceramiko"]),
            vec!["ceramiko", "ĉapelo", "dento"]
        );
        assert_eq!(sorted(&["ŭato", "vojo", "urbo"]), vec!["urbo", "ŭato", "vojo"]);
        assert_eq!(sorted(&["ŝafo", "tago", "sako"]), vec!["sako", "ŝafo", "tago"]);
    }

    #[test]
    fn test_codepoint_order_is_not_used() {
        // 'ĝ' has a higher codepoint than 'h' but must sort before it.
        assert_eq!(sorted(&["hundo", "ĝardeno"]), vec!["ĝardeno", "hundo"]);
    }

    #[test]
    fn test_lower_case_before_upper_case() {
        assert_eq!(sorted(&["Kristo", "kristo"]), vec!["kristo", "Kristo"]);
        assert_eq!(sorted(&["Apro", "abelo"]), vec!["abelo", "Apro"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(sorted(&["hundoj", "hundo"]), vec!["hundo", "hundoj"]);
    }

    #[test]
    fn test_language_names() {
        assert_eq!(
            sorted(&["Ĉeĥa", "French", "English", "Germana"]),
            vec!["Ĉeĥa", "English", "French", "Germana"]
        );
    }

    #[test]
    fn test_equal_only_for_identical_strings() {
        let collator = EsperantoCollator::new();
        assert_eq!(collator.compare("ŝafo", "ŝafo"), Ordering::Equal);
        assert_ne!(collator.compare("ŝafo", "Ŝafo"), Ordering::Equal);
    }

    #[test]
    fn test_separators_before_letters() {
        assert_eq!(sorted(&["-iĝi", "iĝi", "a"]), vec!["-iĝi", "a", "iĝi"]);
    }
}
