// File: src/error.rs
use thiserror::Error;

/// Errors surfaced by the dictionary engine and its storage layer.
///
/// Lookup misses, empty input and oversized spelling candidate sets are
/// not errors; they are handled where they occur.
#[derive(Debug, Error)]
pub enum VortaroError {
    /// The backing store could not answer a query.
    #[error("dictionary store unavailable: {reason}")]
    StoreUnavailable {
        /// What the store reported
        reason: String,
    },

    /// A record points at a headword or definition that does not exist.
    #[error("dangling {kind} reference: {id}")]
    DanglingReference {
        /// Kind of record referenced ("headword", "definition", "translation")
        kind: &'static str,
        /// The missing id
        id: usize,
    },

    /// A dictionary source defines the same headword twice.
    #[error("duplicate headword: {word}")]
    DuplicateHeadword {
        /// The repeated headword
        word: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("dictionary source error: {0}")]
    Source(#[from] serde_json::Error),

    /// Neither a local data directory nor a home directory could be found.
    #[error("could not find a data directory for the dictionary snapshot")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, VortaroError>;
