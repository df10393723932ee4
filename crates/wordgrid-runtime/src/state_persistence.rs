#![forbid(unsafe_code)]

//! Key-value preference storage.
//!
//! Preferences are small string values (the chosen language, the theme)
//! that outlive a session. [`StorageBackend`] abstracts where they live:
//!
//! - [`MemoryStorage`]: in-process only, for tests and for running without
//!   a preferences file.
//! - [`FileStorage`]: a JSON document on disk, rewritten atomically
//!   (temp file + rename) on every change so a crash never leaves a torn
//!   file behind.
//!
//! Storage failures are reported as [`StorageError`]; callers treat them as
//! non-fatal and keep running with whatever they already have.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Errors from a storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    Io(io::Error),
    /// Values could not be encoded.
    Serialization(String),
    /// The backing file exists but is not a preferences document.
    Corrupted { path: PathBuf, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "preference storage I/O error: {err}"),
            Self::Serialization(reason) => write!(f, "could not encode preferences: {reason}"),
            Self::Corrupted { path, reason } => {
                write!(f, "preferences file {} is unreadable: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Where preferences live.
pub trait StorageBackend: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Stored value for `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Returns whether it was present.
    fn remove(&mut self, key: &str) -> StorageResult<bool>;
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    version: u32,
    entries: BTreeMap<String, String>,
}

/// JSON file storage with atomic writes.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open `path`, reading existing entries. A missing file is empty
    /// storage; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => {
                let doc: Document =
                    serde_json::from_str(&text).map_err(|err| StorageError::Corrupted {
                        path: path.clone(),
                        reason: err.to_string(),
                    })?;
                if doc.version > FORMAT_VERSION {
                    return Err(StorageError::Corrupted {
                        path,
                        reason: format!("unsupported version {}", doc.version),
                    });
                }
                doc.entries
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "preferences opened");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn flush(&self) -> StorageResult<()> {
        let doc = Document {
            version: FORMAT_VERSION,
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            // Keep memory and disk in agreement.
            match previous {
                Some(v) => self.entries.insert(key.to_string(), v),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(false);
        };
        if let Err(err) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(err);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);
        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
        assert!(storage.remove("theme").unwrap());
        assert!(!storage.remove("theme").unwrap());
        assert!(storage.is_empty());
    }

    #[test]
    fn file_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(storage.get("language").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn file_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let mut storage = FileStorage::open(&path).unwrap();
        storage.set("language", "japanese").unwrap();
        storage.set("theme", "light").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("language").unwrap().as_deref(), Some("japanese"));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
        assert!(!path.with_file_name("prefs.json.tmp").exists());
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        let err = FileStorage::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Corrupted { .. }));
        assert!(err.to_string().contains("prefs.json"));
    }

    #[test]
    fn newer_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"version": 9, "entries": {}}"#).unwrap();
        assert!(FileStorage::open(&path).is_err());
    }

    #[test]
    fn failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("prefs.json");
        fs::create_dir(&path).unwrap();
        let mut storage = FileStorage {
            path,
            entries: BTreeMap::new(),
        };
        assert!(storage.set("theme", "dark").is_err());
        assert_eq!(storage.get("theme").unwrap(), None);
    }
}
