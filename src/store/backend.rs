// src/store/backend.rs

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::errors::PlanError;

/// Key-value persistence consumed by the store. The planner uses exactly one
/// key for the whole application state; the trait stays general so tests and
/// future callers can use others.
pub trait StorageBackend: Send {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PlanError>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PlanError>;
}

/// File-per-key backend rooted in the platform config directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Backend under `<config dir>/roomplan/`, e.g. `~/.config/roomplan/`.
    pub fn new() -> Result<Self, PlanError> {
        let root = dirs::config_dir()
            .ok_or_else(|| PlanError::Storage("no platform config directory".into()))?
            .join("roomplan");
        Ok(Self { root })
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PlanError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PlanError::Storage(err.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PlanError> {
        fs::create_dir_all(&self.root).map_err(|err| PlanError::Storage(err.to_string()))?;
        let path = self.path_for(key);
        debug!("writing {} bytes to {}", value.len(), path.display());
        fs::write(path, value).map_err(|err| PlanError::Storage(err.to_string()))
    }
}

/// In-memory backend. Clones share the same slots, so a test can hold one
/// handle while the store owns another and observe every write.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    slots: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls seen so far, across all clones.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PlanError> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), PlanError> {
        self.slots.lock().insert(key.to_string(), value.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
