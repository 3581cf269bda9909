//! Persistence of the table number between runs.
//!
//! The value lives under a single key, [`TABLE_KEY`], so a file store holds a
//! JSON object like `{"table_number": "12"}`.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// Key the table number is stored under.
pub const TABLE_KEY: &str = "table_number";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where the session keeps the last table number entered.
pub trait TableStore: Send + Sync {
    /// Returns the stored table number, `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    fn save(&self, table: &str) -> Result<(), StorageError>;
}

/// JSON file on disk. A missing file means no table saved.
#[derive(Debug, Clone)]
pub struct FileTableStore {
    path: PathBuf,
}

impl FileTableStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => match serde_json::from_str::<Value>(&content)? {
                Value::Object(map) => Ok(map),
                other => {
                    warn!(path = %self.path.display(), kind = ?other, "Table file is not an object, ignoring");
                    Ok(Map::new())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl TableStore for FileTableStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let map = self.read_map()?;
        let table = map
            .get(TABLE_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);
        debug!(path = %self.path.display(), ?table, "Loaded table");
        Ok(table)
    }

    /// Rewrites the file, keeping any other keys already in it.
    fn save(&self, table: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(TABLE_KEY.to_string(), Value::String(table.to_string()));
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)?;
        debug!(path = %self.path.display(), table, "Saved table");
        Ok(())
    }
}

/// In-process store used by tests and one-shot CLI runs.
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    table: Mutex<Option<String>>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: Mutex::new(Some(table.into())),
        }
    }
}

impl TableStore for MemoryTableStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, table: &str) -> Result<(), StorageError> {
        *self
            .table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(table.to_string());
        Ok(())
    }
}
