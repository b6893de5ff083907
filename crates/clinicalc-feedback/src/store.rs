//! String key-value stores backing feedback and favorites.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::FeedbackError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, FeedbackError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FeedbackError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, FeedbackError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(FeedbackError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FeedbackError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no stored value");
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.display(), "stored value loaded");
        Ok(Some(contents))
    }

    /// Atomic write: tmp file, then rename over the target.
    fn set(&mut self, key: &str, value: &str) -> Result<(), FeedbackError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path)?;
        tracing::info!(path = %path.display(), "stored value saved");
        Ok(())
    }
}

/// Process-local store, for tests and sessions that should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FeedbackError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FeedbackError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a JSON document, treating an absent key as the default value.
pub(crate) fn load_json<T, S>(store: &S, key: &str) -> Result<T, FeedbackError>
where
    T: serde::de::DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(T::default()),
    }
}

pub(crate) fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), FeedbackError>
where
    T: serde::Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    store.set(key, &json)
}
