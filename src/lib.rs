// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod persistence;
pub mod store;

pub use crate::core::engine::{DictionaryEngine, Query, Response, SearchOutcome, SearchResult};
pub use crate::error::{Result, VortaroError};
pub use crate::store::{DictionaryStore, MemoryStore};
