// File: src/store.rs
use crate::core::types::{
    DefinitionId, DefinitionRecord, Headword, SubdefinitionRecord, Translation, Variant, WordId,
};
use crate::error::{Result, VortaroError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Read-only queries the engine needs from a dictionary backend.
///
/// Results within one call come back in the store's own order; callers
/// that need alphabetical order sort with a [`Collator`](crate::core::collation::Collator).
pub trait DictionaryStore: Send + Sync {
    fn find_headword(&self, word: &str) -> Result<Option<Headword>>;

    fn find_variants_by_surface(&self, surface: &str) -> Result<Vec<Variant>>;

    fn find_variants_by_surface_in(&self, surfaces: &[String]) -> Result<Vec<Variant>>;

    fn find_translations_by_text(&self, text: &str) -> Result<Vec<Translation>>;

    fn find_translations_by_definition(&self, definition: DefinitionId) -> Result<Vec<Translation>>;

    fn find_definitions_by_headword(&self, headword: &Headword) -> Result<Vec<DefinitionRecord>>;
}

// --- Dictionary source: the JSON shape dictionaries are imported from ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionarySource {
    pub words: Vec<WordEntry>,
    /// Roots and affixes known to the morphological segmenter.
    #[serde(default)]
    pub morphemes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    /// Inflected and derived forms. The headword itself is always added.
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<DefinitionEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionEntry {
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub remarks: Vec<String>,
    #[serde(default)]
    pub translations: Vec<TranslationEntry>,
    #[serde(default)]
    pub subdefinitions: Vec<SubdefinitionEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubdefinitionEntry {
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub translations: Vec<TranslationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub language: String,
    pub translation: String,
}

impl WordEntry {
    pub fn new(word: &str) -> Self {
        Self { word: word.to_string(), ..Self::default() }
    }

    pub fn variant(mut self, surface: &str) -> Self {
        self.variants.push(surface.to_string());
        self
    }

    pub fn definition(mut self, definition: DefinitionEntry) -> Self {
        self.definitions.push(definition);
        self
    }
}

impl DefinitionEntry {
    pub fn new(definition: &str) -> Self {
        Self { definition: definition.to_string(), ..Self::default() }
    }

    pub fn example(mut self, example: &str) -> Self {
        self.examples.push(example.to_string());
        self
    }

    pub fn remark(mut self, remark: &str) -> Self {
        self.remarks.push(remark.to_string());
        self
    }

    pub fn translation(mut self, language: &str, translation: &str) -> Self {
        self.translations.push(TranslationEntry::new(language, translation));
        self
    }

    pub fn subdefinition(mut self, subdefinition: SubdefinitionEntry) -> Self {
        self.subdefinitions.push(subdefinition);
        self
    }
}

impl SubdefinitionEntry {
    pub fn new(definition: &str) -> Self {
        Self { definition: definition.to_string(), ..Self::default() }
    }

    pub fn example(mut self, example: &str) -> Self {
        self.examples.push(example.to_string());
        self
    }

    pub fn translation(mut self, language: &str, translation: &str) -> Self {
        self.translations.push(TranslationEntry::new(language, translation));
        self
    }
}

impl TranslationEntry {
    pub fn new(language: &str, translation: &str) -> Self {
        Self { language: language.to_string(), translation: translation.to_string() }
    }
}

// --- MemoryStore: the in-process backend, also the snapshot format ---

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DefinitionNode {
    word: WordId,
    text: String,
    examples: Vec<String>,
    remarks: Vec<String>,
    children: Vec<DefinitionId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TranslationRow {
    definition: DefinitionId,
    language: String,
    translation: String,
}

/// An indexed, immutable dictionary held in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    words: Vec<String>,
    word_index: HashMap<String, WordId>,
    /// Surface form -> headwords, in insertion order.
    variants: HashMap<String, Vec<WordId>>,
    definitions: Vec<DefinitionNode>,
    /// Top-level definitions per headword.
    word_definitions: HashMap<WordId, Vec<DefinitionId>>,
    translations: Vec<TranslationRow>,
    translations_by_text: HashMap<String, Vec<usize>>,
    translations_by_definition: HashMap<DefinitionId, Vec<usize>>,
    morphemes: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and indexes a store from an imported dictionary source.
    pub fn from_source(source: DictionarySource) -> Result<Self> {
        let mut store = Self::new();

        for entry in source.words {
            if store.word_index.contains_key(&entry.word) {
                return Err(VortaroError::DuplicateHeadword { word: entry.word });
            }
            let word_id = store.words.len();
            store.words.push(entry.word.clone());
            store.word_index.insert(entry.word.clone(), word_id);

            let mut seen = HashSet::new();
            let surfaces = std::iter::once(entry.word.as_str())
                .chain(entry.variants.iter().map(String::as_str));
            for surface in surfaces {
                let surface = surface.to_lowercase();
                if seen.insert(surface.clone()) {
                    store.variants.entry(surface).or_default().push(word_id);
                }
            }

            for definition in entry.definitions {
                store.add_definition(word_id, definition);
            }
        }

        let mut seen = HashSet::new();
        store.morphemes = source
            .morphemes
            .into_iter()
            .map(|m| m.to_lowercase())
            .filter(|m| !m.is_empty() && seen.insert(m.clone()))
            .collect();

        tracing::debug!(
            headwords = store.words.len(),
            surfaces = store.variants.len(),
            translations = store.translations.len(),
            "built dictionary store"
        );
        Ok(store)
    }

    fn add_definition(&mut self, word: WordId, entry: DefinitionEntry) {
        let id = self.push_definition(word, entry.definition, entry.examples, entry.remarks);
        self.word_definitions.entry(word).or_default().push(id);
        self.add_translations(id, entry.translations);

        for sub in entry.subdefinitions {
            let sub_id = self.push_definition(word, sub.definition, sub.examples, vec![]);
            self.definitions[id].children.push(sub_id);
            self.add_translations(sub_id, sub.translations);
        }
    }

    fn push_definition(
        &mut self,
        word: WordId,
        text: String,
        examples: Vec<String>,
        remarks: Vec<String>,
    ) -> DefinitionId {
        self.definitions.push(DefinitionNode {
            word,
            text,
            examples,
            remarks,
            children: Vec::new(),
        });
        self.definitions.len() - 1
    }

    fn add_translations(&mut self, definition: DefinitionId, entries: Vec<TranslationEntry>) {
        for entry in entries {
            let row = self.translations.len();
            self.translations_by_text
                .entry(entry.translation.clone())
                .or_default()
                .push(row);
            self.translations_by_definition
                .entry(definition)
                .or_default()
                .push(row);
            self.translations.push(TranslationRow {
                definition,
                language: entry.language,
                translation: entry.translation,
            });
        }
    }

    pub fn headword_count(&self) -> usize {
        self.words.len()
    }

    /// The morpheme inventory shipped with the dictionary source.
    pub fn morphemes(&self) -> &[String] {
        &self.morphemes
    }

    fn headword(&self, id: WordId) -> Result<Headword> {
        self.words
            .get(id)
            .map(|word| Headword { id, word: word.clone() })
            .ok_or(VortaroError::DanglingReference { kind: "headword", id })
    }

    fn definition(&self, id: DefinitionId) -> Result<&DefinitionNode> {
        self.definitions
            .get(id)
            .ok_or(VortaroError::DanglingReference { kind: "definition", id })
    }

    fn variants_for(&self, surface: &str, out: &mut Vec<Variant>) -> Result<()> {
        if let Some(ids) = self.variants.get(surface) {
            for &id in ids {
                out.push(Variant { surface: surface.to_string(), headword: self.headword(id)? });
            }
        }
        Ok(())
    }

    fn translation_rows(&self, rows: Option<&Vec<usize>>) -> Result<Vec<Translation>> {
        let Some(rows) = rows else {
            return Ok(vec![]);
        };
        rows.iter()
            .map(|&row| {
                let row = self
                    .translations
                    .get(row)
                    .ok_or(VortaroError::DanglingReference { kind: "translation", id: row })?;
                let word = self.headword(self.definition(row.definition)?.word)?.word;
                Ok(Translation {
                    definition: row.definition,
                    language: row.language.clone(),
                    translation: row.translation.clone(),
                    word,
                })
            })
            .collect()
    }
}

impl DictionaryStore for MemoryStore {
    fn find_headword(&self, word: &str) -> Result<Option<Headword>> {
        match self.word_index.get(word) {
            Some(&id) => self.headword(id).map(Some),
            None => Ok(None),
        }
    }

    fn find_variants_by_surface(&self, surface: &str) -> Result<Vec<Variant>> {
        let mut found = Vec::new();
        self.variants_for(surface, &mut found)?;
        Ok(found)
    }

    fn find_variants_by_surface_in(&self, surfaces: &[String]) -> Result<Vec<Variant>> {
        let mut found = Vec::new();
        let mut seen = HashSet::new();
        for surface in surfaces {
            if seen.insert(surface.as_str()) {
                self.variants_for(surface, &mut found)?;
            }
        }
        Ok(found)
    }

    fn find_translations_by_text(&self, text: &str) -> Result<Vec<Translation>> {
        self.translation_rows(self.translations_by_text.get(text))
    }

    fn find_translations_by_definition(&self, definition: DefinitionId) -> Result<Vec<Translation>> {
        self.translation_rows(self.translations_by_definition.get(&definition))
    }

    fn find_definitions_by_headword(&self, headword: &Headword) -> Result<Vec<DefinitionRecord>> {
        let Some(ids) = self.word_definitions.get(&headword.id) else {
            return Ok(vec![]);
        };

        let mut records = Vec::with_capacity(ids.len());
        for &id in ids {
            let node = self.definition(id)?;
            let mut subdefinitions = Vec::with_capacity(node.children.len());
            for &sub_id in &node.children {
                let sub = self.definition(sub_id)?;
                subdefinitions.push(SubdefinitionRecord {
                    id: sub_id,
                    definition: sub.text.clone(),
                    examples: sub.examples.clone(),
                });
            }
            records.push(DefinitionRecord {
                id,
                definition: node.text.clone(),
                examples: node.examples.clone(),
                remarks: node.remarks.clone(),
                subdefinitions,
            });
        }
        Ok(records)
    }
}
