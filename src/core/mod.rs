// src/core/mod.rs

pub mod collation;
pub mod engine;
pub mod morphology;
pub mod normalizer;
pub mod resolver;
pub mod translations;
pub mod trie;
pub mod types;
