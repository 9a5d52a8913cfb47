//! String-keyed storage for the saved canvas
//!
//! Persistence is best-effort. Reads that fail, or records that do not
//! decode, leave the app with an empty canvas. Writes that fail are
//! logged and otherwise ignored.

use crate::core::errors::{PolyContext, PolyResult};
use crate::core::settings::STORAGE_KEY;
use crate::data::record::SavedCanvas;
use bevy::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// A string-keyed store of string values
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> PolyResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PolyResult<()>;
    fn remove(&mut self, key: &str) -> PolyResult<()>;
}

/// Keeps each key in its own `<key>.json` file inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PolyResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)
            .with_file_context("read", &path)?;
        Ok(Some(raw))
    }

    fn set(&mut self, key: &str, value: &str) -> PolyResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_file_context("create directory for", &self.dir)?;
        let path = self.path_for(key);
        std::fs::write(&path, value).with_file_context("write", &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PolyResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path).with_file_context("remove", &path)?;
        }
        Ok(())
    }
}

/// In-memory store, used with `--ephemeral` and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PolyResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PolyResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PolyResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Resource giving both components access to the saved canvas
#[derive(Resource)]
pub struct RecordStore {
    backend: Box<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(backend: impl KeyValueStore) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    fn raw(&self) -> Option<String> {
        match self.backend.get(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read saved canvas: {:#}", e);
                None
            }
        }
    }

    /// The saved canvas, or `None` when there is none or it is unusable
    pub fn load_canvas(&self) -> Option<SavedCanvas> {
        let raw = self.raw()?;
        match SavedCanvas::decode(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring saved canvas: {}", e);
                None
            }
        }
    }

    pub fn save_canvas(&mut self, record: &SavedCanvas) {
        let raw = match record.encode() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not encode canvas: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(STORAGE_KEY, &raw) {
            warn!("Could not save canvas: {:#}", e);
        }
    }

    pub fn clear_canvas(&mut self) {
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            warn!("Could not erase saved canvas: {:#}", e);
        }
    }

    /// Writes raw text under the canvas key, bypassing validation
    #[cfg(test)]
    pub(crate) fn put_raw(&mut self, raw: &str) {
        if let Err(e) = self.backend.set(STORAGE_KEY, raw) {
            warn!("Could not save canvas: {:#}", e);
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
