// File: src/config.rs
use crate::error::{Result, VortaroError};
use std::path::PathBuf;

pub const DICTIONARY_ENV: &str = "VORTARO_DICTIONARY";
pub const LOG_ENV: &str = "VORTARO_LOG";
pub const DEFAULT_LOG_FILTER: &str = "vortaro=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the bincode dictionary snapshot lives.
    pub dictionary_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dictionary_path = match var(DICTIONARY_ENV).filter(|p| !p.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_dictionary_path()?,
        };
        let log_filter = var(LOG_ENV)
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { dictionary_path, log_filter })
    }
}

/// `<local data dir>/vortaro/vortaro.bin`, falling back to the home directory.
pub fn default_dictionary_path() -> Result<PathBuf> {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or(VortaroError::NoDataDir)?;
    path.push("vortaro");
    path.push("vortaro.bin");
    Ok(path)
}
