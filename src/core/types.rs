// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A unique identifier for a canonical Esperanto headword.
pub type WordId = usize;

/// Identifier shared by primary definitions and subdefinitions, so that
/// examples and translations can hang off either.
pub type DefinitionId = usize;

/// One candidate decomposition of a word into morphemes,
/// e.g. `["mal", "san", "ul", "ej", "o"]`.
pub type Segmentation = Vec<String>;

/// A canonical dictionary entry. Identity is the `id`; two headwords with
/// the same spelling in different case are different entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Headword {
    pub id: WordId,
    pub word: String,
}

/// A recorded inflected or derived form of a headword.
/// Surface forms are always stored lower case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub surface: String,
    pub headword: Headword,
}

/// A translation of one definition (or subdefinition) into another language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub definition: DefinitionId,
    pub language: String,
    pub translation: String,
    /// The headword whose definition this translates, resolved by the store.
    pub word: String,
}

/// A subdefinition together with its usage examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdefinitionRecord {
    pub id: DefinitionId,
    pub definition: String,
    pub examples: Vec<String>,
}

/// A primary definition of a headword and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub id: DefinitionId,
    pub definition: String,
    pub examples: Vec<String>,
    pub remarks: Vec<String>,
    pub subdefinitions: Vec<SubdefinitionRecord>,
}
