// File: src/core/resolver.rs
use crate::core::collation::{sort_headwords, Collator};
use crate::core::types::{Headword, Variant};
use crate::error::Result;
use crate::fuzzy::spelling::SpellingVariations;
use crate::store::DictionaryStore;
use std::collections::HashSet;

/// Most surface forms a single approximate lookup may query the store with.
pub const MAX_SPELLING_CANDIDATES: usize = 999;

/// Every headword that has `key` as a registered form, deduplicated and in
/// alphabetical order.
pub fn exact_match(
    store: &dyn DictionaryStore,
    collator: &dyn Collator,
    key: &str,
) -> Result<Vec<Headword>> {
    if key.is_empty() {
        return Ok(vec![]);
    }
    let variants = store.find_variants_by_surface(key)?;
    let mut words = distinct_headwords(variants, &HashSet::new());
    sort_headwords(&mut words, collator);
    Ok(words)
}

/// Headwords reachable through alternative spellings of `key`, leaving out
/// anything in `exclude`.
pub fn approximate_match(
    store: &dyn DictionaryStore,
    spelling: &dyn SpellingVariations,
    collator: &dyn Collator,
    key: &str,
    exclude: &[Headword],
) -> Result<Vec<Headword>> {
    if key.is_empty() {
        return Ok(vec![]);
    }
    let candidates = cap_candidates(spelling.variations(key));
    if candidates.is_empty() {
        return Ok(vec![]);
    }

    let variants = store.find_variants_by_surface_in(&candidates)?;
    let excluded: HashSet<_> = exclude.iter().map(|w| w.id).collect();
    let mut words = distinct_headwords(variants, &excluded);
    sort_headwords(&mut words, collator);

    tracing::debug!(
        key,
        candidates = candidates.len(),
        matches = words.len(),
        "approximate lookup"
    );
    Ok(words)
}

/// Keeps the first [`MAX_SPELLING_CANDIDATES`] candidates in generator order.
pub fn cap_candidates(mut candidates: Vec<String>) -> Vec<String> {
    if candidates.len() > MAX_SPELLING_CANDIDATES {
        tracing::debug!(
            generated = candidates.len(),
            kept = MAX_SPELLING_CANDIDATES,
            "truncating spelling candidates"
        );
        candidates.truncate(MAX_SPELLING_CANDIDATES);
    }
    candidates
}

/// Headwords in arrival order, first occurrence wins.
fn distinct_headwords(variants: Vec<Variant>, excluded: &HashSet<usize>) -> Vec<Headword> {
    let mut seen = HashSet::new();
    variants
        .into_iter()
        .map(|v| v.headword)
        .filter(|w| !excluded.contains(&w.id) && seen.insert(w.id))
        .collect()
}
