//! File-backed [`IdentityProvider`].
//!
//! Values live in a flat JSON object (`{"chatbot-user-id": "..."}`). A key
//! is written once on its first read-miss and never rewritten afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use titu_common::{new_id, IdentityProvider, PlatformError};
use tracing::{debug, info};

use crate::paths::identity_file;

pub struct FileIdentityStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store at the platform default location (`data_dir()/identity.json`).
    pub fn open_default() -> Result<Self, PlatformError> {
        Ok(Self::new(identity_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PlatformError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = std::fs::read_to_string(&self.path).map_err(|e| {
            PlatformError::StorageError(format!("failed to read {}: {e}", self.path.display()))
        })?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&data).map_err(|e| {
            PlatformError::StorageError(format!("{} is not a JSON object: {e}", self.path.display()))
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PlatformError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlatformError::PathError(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| PlatformError::StorageError(e.to_string()))?;

        // Write-then-rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| {
            PlatformError::StorageError(format!("failed to write {}: {e}", tmp.display()))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            PlatformError::StorageError(format!("failed to replace {}: {e}", self.path.display()))
        })
    }
}

impl IdentityProvider for FileIdentityStore {
    fn get_or_create(&self, key: &str) -> Result<String, PlatformError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut values = self.read_all()?;
        if let Some(existing) = values.get(key) {
            debug!(key, "reusing persisted identity");
            return Ok(existing.clone());
        }

        let value = new_id();
        values.insert(key.to_string(), value.clone());
        self.write_all(&values)?;
        info!(key, path = %self.path.display(), "persisted new identity");
        Ok(value)
    }
}
