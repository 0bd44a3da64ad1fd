// File: src/core/engine.rs
use crate::core::collation::{Collator, EsperantoCollator};
use crate::core::morphology::{top_segmentations, MorphemeSegmenter, Segmenter};
use crate::core::normalizer::normalize;
use crate::core::resolver::{approximate_match, exact_match};
use crate::core::translations::{group_translations, TranslationGroup};
use crate::core::types::{DefinitionRecord, Headword, Segmentation};
use crate::error::Result;
use crate::fuzzy::spelling::{EsperantoSpelling, SpellingVariations};
use crate::store::{DictionaryStore, MemoryStore};
use serde::Serialize;

/// Everything a search page shows for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub display_term: String,
    pub exact_matches: Vec<Headword>,
    /// Found through alternative spellings; never repeats an exact match.
    pub similar_matches: Vec<Headword>,
    pub segmentations: Vec<Segmentation>,
    pub translation_groups: Vec<TranslationGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    /// A direct search hit a headword; show that word instead of results.
    Redirect(Headword),
    Results(SearchResult),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubdefinitionTree {
    pub definition: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionTree {
    pub definition: String,
    pub remarks: Vec<String>,
    pub examples: Vec<String>,
    pub subdefinitions: Vec<SubdefinitionTree>,
}

/// Translations of one primary definition and of its subdefinitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionTranslations {
    pub definition: Vec<TranslationGroup>,
    /// Only subdefinitions that have translations appear here.
    pub subdefinitions: Vec<Vec<TranslationGroup>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPage {
    pub word: Headword,
    pub definitions: Vec<DefinitionTree>,
    pub translations: Vec<DefinitionTranslations>,
}

/// What the front end should do with a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Response {
    Page(WordPage),
    Redirect(Headword),
    Results(SearchResult),
}

impl From<SearchOutcome> for Response {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Redirect(word) => Response::Redirect(word),
            SearchOutcome::Results(result) => Response::Results(result),
        }
    }
}

/// A request as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Show the page of exactly this headword.
    Word(String),
    Search { term: String, direct: bool },
}

impl Query {
    /// `vorto <word>`, `serĉo <term>` (or `sercxo`), `rekte <term>`; anything
    /// else is a plain search. A command word on its own is a search for that
    /// word. Blank input is no query.
    pub fn parse(input: &str) -> Option<Query> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let Some((command, rest)) = input
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
        else {
            return Some(Query::Search { term: input.to_string(), direct: false });
        };
        let query = match command {
            "vorto" => Query::Word(rest.to_string()),
            "serĉo" | "sercxo" => Query::Search { term: rest.to_string(), direct: false },
            "rekte" => Query::Search { term: rest.to_string(), direct: true },
            _ => Query::Search { term: input.to_string(), direct: false },
        };
        Some(query)
    }
}

// The engine only holds read-only collaborators, so one instance can serve
// many requests at once behind an `Arc`.
pub struct DictionaryEngine<S: DictionaryStore = MemoryStore> {
    pub store: S,
    pub spelling: Box<dyn SpellingVariations>,
    pub segmenter: Box<dyn Segmenter>,
    pub collator: Box<dyn Collator>,
}

impl DictionaryEngine<MemoryStore> {
    /// Engine over an in-memory dictionary with the default Esperanto
    /// spelling rules, alphabet and a segmenter seeded from its morphemes.
    pub fn from_store(store: MemoryStore) -> Self {
        let segmenter = MorphemeSegmenter::new(store.morphemes());
        tracing::info!(
            headwords = store.headword_count(),
            morphemes = segmenter.morpheme_count(),
            "dictionary engine ready"
        );
        Self::new(
            store,
            Box::new(EsperantoSpelling::default()),
            Box::new(segmenter),
            Box::new(EsperantoCollator::new()),
        )
    }
}

impl<S: DictionaryStore> DictionaryEngine<S> {
    pub fn new(
        store: S,
        spelling: Box<dyn SpellingVariations>,
        segmenter: Box<dyn Segmenter>,
        collator: Box<dyn Collator>,
    ) -> Self {
        Self { store, spelling, segmenter, collator }
    }

    /// Resolves a raw search string. With `direct`, an exact hit short-circuits
    /// to a redirect to the first match in alphabetical order.
    pub fn search(&self, raw_term: &str, direct: bool) -> Result<SearchOutcome> {
        let term = normalize(raw_term);

        if direct {
            let matches = exact_match(&self.store, self.collator.as_ref(), &term.direct_key)?;
            if let Some(first) = matches.into_iter().next() {
                tracing::debug!(term = %term.display_term, word = %first.word, "direct hit");
                return Ok(SearchOutcome::Redirect(first));
            }
        }

        let key = term.lookup_key.as_str();
        let exact_matches = exact_match(&self.store, self.collator.as_ref(), key)?;
        let similar_matches = approximate_match(
            &self.store,
            self.spelling.as_ref(),
            self.collator.as_ref(),
            key,
            &exact_matches,
        )?;
        let segmentations = top_segmentations(self.segmenter.as_ref(), key);

        // Translations are matched as typed, not as Esperanto lookup keys.
        let translation_groups = if term.display_term.is_empty() {
            vec![]
        } else {
            let found = self.store.find_translations_by_text(&term.display_term)?;
            group_translations(found, self.collator.as_ref())
        };

        tracing::debug!(
            key,
            exact = exact_matches.len(),
            similar = similar_matches.len(),
            parses = segmentations.len(),
            languages = translation_groups.len(),
            "search complete"
        );

        Ok(SearchOutcome::Results(SearchResult {
            display_term: term.display_term,
            exact_matches,
            similar_matches,
            segmentations,
            translation_groups,
        }))
    }

    /// Shows the page of an exact headword, or searches for it when there
    /// is no such headword.
    pub fn lookup_word(&self, word: &str) -> Result<Response> {
        let word = word.trim();
        let Some(headword) = self.store.find_headword(word)? else {
            tracing::warn!(word, "no such headword, searching instead");
            return self.search(word, false).map(Response::from);
        };

        let definitions = self.store.find_definitions_by_headword(&headword)?;
        let translations = self.definition_translations(&definitions)?;
        let definitions = definitions.into_iter().map(definition_tree).collect();

        Ok(Response::Page(WordPage { word: headword, definitions, translations }))
    }

    pub fn dispatch(&self, query: &Query) -> Result<Response> {
        match query {
            Query::Word(word) => self.lookup_word(word),
            Query::Search { term, direct } => self.search(term, *direct).map(Response::from),
        }
    }

    fn definition_translations(
        &self,
        definitions: &[DefinitionRecord],
    ) -> Result<Vec<DefinitionTranslations>> {
        let collator = self.collator.as_ref();
        let mut all = Vec::new();

        for definition in definitions {
            let found = self.store.find_translations_by_definition(definition.id)?;
            let groups = group_translations(found, collator);

            let mut subdefinitions = Vec::new();
            for sub in &definition.subdefinitions {
                let found = self.store.find_translations_by_definition(sub.id)?;
                let sub_groups = group_translations(found, collator);
                if !sub_groups.is_empty() {
                    subdefinitions.push(sub_groups);
                }
            }

            if !groups.is_empty() || !subdefinitions.is_empty() {
                all.push(DefinitionTranslations { definition: groups, subdefinitions });
            }
        }
        Ok(all)
    }
}

fn definition_tree(record: DefinitionRecord) -> DefinitionTree {
    DefinitionTree {
        definition: record.definition,
        remarks: record.remarks,
        examples: record.examples,
        subdefinitions: record
            .subdefinitions
            .into_iter()
            .map(|sub| SubdefinitionTree { definition: sub.definition, examples: sub.examples })
            .collect(),
    }
}
