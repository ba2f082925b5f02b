//! String key-value backends with local-storage semantics.

use crate::errors::AppResult;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Minimal persistent key-value API: string keys, string values.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

/// Key-value store persisted as one JSON object file.
///
/// The file is re-read on every call and rewritten in full on every write.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an empty store file if none exists yet.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if !self.path.exists() {
            self.write_map(&BTreeMap::new())?;
        }
        Ok(())
    }

    fn read_map(&self) -> AppResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-process store, nothing touches the disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }
}
