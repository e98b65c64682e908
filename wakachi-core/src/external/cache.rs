//! Segmentation result caches
//!
//! Keys are the hex SHA-256 of `"{salt}:{source}:{language}"`. Concurrent
//! writers may race on the same key; the last write wins.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;
use sha2::{Digest, Sha256};

use super::{BoxError, ResultCache};
use crate::api::Segmentation;

/// Salt mixed into every cache key; bump it to invalidate old entries
pub const CACHE_SALT: &str = "2018-08-11";

const CACHE_FILE_NAME: &str = "cache.json";

/// Cache key for a source text and language
pub fn cache_key(source: &str, language: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{CACHE_SALT}:{source}:{language}").as_bytes());
    hex::encode(hasher.finalize())
}

fn poisoned<T>(_: T) -> BoxError {
    "cache lock poisoned".into()
}

/// Process-local cache
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Segmentation>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultCache for MemoryCache {
    fn get(&self, source: &str, language: &str) -> Result<Option<Segmentation>, BoxError> {
        let entries = self.entries.lock().map_err(poisoned)?;
        Ok(entries.get(&cache_key(source, language)).cloned())
    }

    fn set(&self, source: &str, language: &str, value: &Segmentation) -> Result<(), BoxError> {
        let mut entries = self.entries.lock().map_err(poisoned)?;
        entries.insert(cache_key(source, language), value.clone());
        Ok(())
    }
}

/// JSON file cache stored as `<dir>/cache.json`.
///
/// The directory is created on the first write. The whole map is read and
/// rewritten on every write.
#[derive(Debug)]
pub struct FileCache {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE_NAME)
    }

    fn load(path: &Path) -> Result<HashMap<String, Segmentation>, BoxError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let json = fs::read_to_string(path)?;
        if json.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&json)?)
    }
}

impl ResultCache for FileCache {
    fn get(&self, source: &str, language: &str) -> Result<Option<Segmentation>, BoxError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = Self::load(&self.file_path())?;
        Ok(entries.remove(&cache_key(source, language)))
    }

    fn set(&self, source: &str, language: &str, value: &Segmentation) -> Result<(), BoxError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let path = self.file_path();
        let mut entries = Self::load(&path)?;
        entries.insert(cache_key(source, language), value.clone());

        fs::create_dir_all(&self.dir)?;
        fs::write(&path, serde_json::to_string(&entries)?)?;
        debug!("wrote {} cache entries to {}", entries.len(), path.display());
        Ok(())
    }
}
