// File: src/core/normalizer.rs
use serde::Serialize;

/// Longer search strings are noise, not words.
pub const MAX_TERM_CHARS: usize = 40;

const ELISION_MARK: char = '\'';

/// The derived forms of one raw search string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTerm {
    /// Trimmed and truncated, otherwise as typed. Shown back to the user and
    /// used for reverse translation lookup.
    pub display_term: String,
    /// Key for variant lookups: elision expanded, hyphens dropped (except a
    /// leading one), lower case.
    pub lookup_key: String,
    /// Key for the direct-jump path: like `lookup_key` but from the
    /// untruncated input and with every hyphen dropped.
    pub direct_key: String,
}

impl SearchTerm {
    pub fn is_empty(&self) -> bool {
        self.lookup_key.is_empty()
    }
}

pub fn normalize(raw: &str) -> SearchTerm {
    let trimmed = raw.trim();
    let display_term = truncate_chars(trimmed, MAX_TERM_CHARS).trim_end().to_string();

    // A hyphen next to a space leaves that space at the edge of the key, and
    // may sit after the elision mark.
    let mut lookup_key = expand_elision(strip_hyphens(&display_term).trim());
    if display_term.starts_with('-') {
        lookup_key.insert(0, '-');
    }
    // Lower-casing can lengthen a string (`İ` becomes two chars), so cap again.
    let lowered = truncate_chars(&lookup_key, MAX_TERM_CHARS).to_lowercase();
    let lookup_key = expand_elision(truncate_chars(&lowered, MAX_TERM_CHARS).trim_end());

    SearchTerm {
        display_term,
        lookup_key,
        direct_key: clean_word(trimmed),
    }
}

/// Canonicalizes a word without any special casing of a leading hyphen.
/// `vort'` and `Vort-o` both become `vorto`.
pub fn clean_word(word: &str) -> String {
    strip_hyphens(&expand_elision(word)).to_lowercase()
}

/// `vort'` is an informal spelling of `vorto`.
fn expand_elision(term: &str) -> String {
    match term.strip_suffix(ELISION_MARK) {
        Some(stem) => format!("{stem}o"),
        None => term.to_string(),
    }
}

fn strip_hyphens(term: &str) -> String {
    term.chars().filter(|&c| c != '-').collect()
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elision_becomes_o() {
        assert_eq!(normalize("vort'").lookup_key, "vorto");
        assert_eq!(normalize("vort'").display_term, "vort'");
    }

    #[test]
    fn test_hyphens_removed_and_lower_cased() {
        let term = normalize("SANKTA-JUL-ARB-O");
        assert_eq!(term.lookup_key, "sanktajularbo");
        assert_eq!(term.display_term, "SANKTA-JUL-ARB-O");
    }

    #[test]
    fn test_leading_hyphen_preserved() {
        assert_eq!(normalize("-iĝi").lookup_key, "-iĝi");
        assert_eq!(normalize("i-ĝi").lookup_key, "iĝi");
        assert_eq!(normalize("-i-ĝi").lookup_key, "-iĝi");
    }

    #[test]
    fn test_direct_key_drops_every_hyphen() {
        assert_eq!(normalize("-iĝi").direct_key, "iĝi");
        assert_eq!(normalize("ŝafo'").direct_key, "ŝafo");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let term = normalize("  hundo \n");
        assert_eq!(term.display_term, "hundo");
        assert_eq!(term.lookup_key, "hundo");
    }

    #[test]
    fn test_truncated_to_forty_characters() {
        let long = "ĉ".repeat(60);
        let term = normalize(&long);
        assert_eq!(term.display_term.chars().count(), MAX_TERM_CHARS);
        assert_eq!(term.lookup_key.chars().count(), MAX_TERM_CHARS);
        // The direct key is built from the untruncated input.
        assert_eq!(term.direct_key.chars().count(), 60);
    }

    #[test]
    fn test_empty_input() {
        let term = normalize("   ");
        assert!(term.is_empty());
        assert_eq!(term.display_term, "");
        assert_eq!(term.direct_key, "");
    }

    #[test]
    fn test_lone_elision_mark() {
        assert_eq!(normalize("'").lookup_key, "o");
    }

    #[test]
    fn test_renormalizing_is_stable() {
        for raw in ["vort'", "SANKTA-JUL-ARB-O", "-iĝi", "Ĉu-", "x'", "hund -", "- a -"] {
            let key = normalize(raw).lookup_key;
            assert_eq!(normalize(&key).lookup_key, key, "input {raw:?}");
        }
    }

    #[test]
    fn test_space_beside_hyphen_trimmed_from_key() {
        assert_eq!(normalize("hund -").lookup_key, "hund");
        assert_eq!(normalize("- iĝi").lookup_key, "-iĝi");
        assert_eq!(normalize("sankta -julia").lookup_key, "sankta julia");
        assert_eq!(normalize("hund - ").display_term, "hund -");
        assert_eq!(normalize("hund' -").lookup_key, "hundo");
    }

    #[test]
    fn test_key_capped_after_lower_casing() {
        let term = normalize(&"İ".repeat(MAX_TERM_CHARS));
        assert_eq!(term.display_term.chars().count(), MAX_TERM_CHARS);
        assert_eq!(term.lookup_key.chars().count(), MAX_TERM_CHARS);
        assert_eq!(normalize(&term.lookup_key).lookup_key, term.lookup_key);
    }

    #[test]
    fn test_clean_word() {
        assert_eq!(clean_word("Vort-o"), "vorto");
        assert_eq!(clean_word("vort'"), "vorto");
    }
}
