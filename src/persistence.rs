// File: src/persistence.rs
use crate::error::Result;
use crate::store::{DictionarySource, MemoryStore};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the store as a bincode snapshot. The file is written next to its
/// destination and renamed into place, so readers never see a partial file.
pub fn save_to_disk(store: &MemoryStore, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, store)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    tracing::info!(path = %path.display(), headwords = store.headword_count(), "saved dictionary");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<MemoryStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let store: MemoryStore = bincode::deserialize_from(reader)?;
    tracing::info!(path = %path.display(), headwords = store.headword_count(), "loaded dictionary");
    Ok(store)
}

/// Reads a JSON dictionary source and indexes it.
pub fn import_source(path: &Path) -> Result<MemoryStore> {
    let file = File::open(path)?;
    let source: DictionarySource = serde_json::from_reader(BufReader::new(file))?;
    MemoryStore::from_source(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DefinitionEntry, DictionaryStore, WordEntry};
    use crate::VortaroError;

    fn sample() -> MemoryStore {
        MemoryStore::from_source(DictionarySource {
            words: vec![WordEntry::new("ŝafo")
                .variant("ŝafoj")
                .definition(DefinitionEntry::new("Remaĉulo.").translation("English", "sheep"))],
            morphemes: vec!["ŝaf".into()],
        })
        .unwrap()
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("vortaro.bin");

        save_to_disk(&sample(), &path).unwrap();
        let store = load_from_disk(&path).unwrap();

        assert_eq!(store.headword_count(), 1);
        assert_eq!(store.morphemes(), &["ŝaf".to_string()]);
        assert_eq!(store.find_variants_by_surface("ŝafoj").unwrap().len(), 1);
        assert_eq!(store.find_translations_by_text("sheep").unwrap()[0].word, "ŝafo");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_disk(&dir.path().join("absent.bin"));
        assert!(matches!(result, Err(VortaroError::Io(_))));
    }

    #[test]
    fn test_load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bin");
        fs::write(&path, [0xff; 3]).unwrap();
        assert!(matches!(load_from_disk(&path), Err(VortaroError::Snapshot(_))));
    }

    #[test]
    fn test_import_json_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.json");
        fs::write(
            &path,
            r#"{
                "words": [
                    {"word": "hundo", "variants": ["hundoj"],
                     "definitions": [{"definition": "Besto.",
                                      "translations": [{"language": "English", "translation": "dog"}]}]}
                ],
                "morphemes": ["hund"]
            }"#,
        )
        .unwrap();

        let store = import_source(&path).unwrap();
        assert_eq!(store.headword_count(), 1);
        assert_eq!(store.find_variants_by_surface("hundoj").unwrap()[0].headword.word, "hundo");
        assert_eq!(store.find_translations_by_text("dog").unwrap().len(), 1);
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(import_source(&path), Err(VortaroError::Source(_))));
    }
}
