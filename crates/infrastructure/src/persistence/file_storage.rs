//! File-backed key-value storage.
//!
//! All entries live in one JSON object on disk. Every write rewrites the
//! whole file through a temporary sibling and a rename. A file that is not
//! valid JSON fails reads and is replaced by the next write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use foodapp_application::ports::{KeyValueStorage, StorageError};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

type Entries = BTreeMap<String, String>;

/// Key-value storage persisted as a JSON file.
#[derive(Debug)]
pub struct FileKeyValueStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileKeyValueStorage {
    /// Creates a storage backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Entries::new()),
            Ok(bytes) => from_json_bytes(&bytes).map_err(|e| {
                StorageError::Serialization(format!("{}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`Self::load`], but a corrupt file counts as empty so the caller
    /// overwrites it. The flag is true when that happened.
    async fn load_for_write(&self) -> Result<(Entries, bool), StorageError> {
        match self.load().await {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Serialization(reason)) => {
                warn!(%reason, "Storage file is corrupt, starting empty");
                Ok((Entries::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    async fn save(&self, entries: &Entries) -> Result<(), StorageError> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent).await?;
        }

        let bytes = to_json_stable_bytes(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), entries = entries.len(), "Storage saved");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let (mut entries, _) = self.load_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let (mut entries, recovered) = self.load_for_write().await?;
        if entries.remove(key).is_none() && !recovered {
            return Ok(());
        }
        self.save(&entries).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileKeyValueStorage {
        FileKeyValueStorage::new(dir.path().join("foodapp").join("storage.json"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        assert_eq!(storage.get("auth_token").await.unwrap(), None);
        storage.remove("auth_token").await.unwrap();
        assert!(!storage.path().exists());
    }

    #[tokio::test]
    async fn test_set_creates_parent_and_persists() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.set("auth_token", "tok").await.unwrap();
        storage.set("auth_exp_at", "1704070795000").await.unwrap();

        let reopened = storage_in(&dir);
        assert_eq!(
            reopened.get("auth_token").await.unwrap().as_deref(),
            Some("tok")
        );
        assert_eq!(
            reopened.get("auth_exp_at").await.unwrap().as_deref(),
            Some("1704070795000")
        );

        let raw = std::fs::read_to_string(storage.path()).unwrap();
        assert!(raw.ends_with("}\n"));
        assert!(raw.find("auth_exp_at").unwrap() < raw.find("auth_token").unwrap());
    }

    #[tokio::test]
    async fn test_remove_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.set("auth_token", "tok").await.unwrap();
        storage.set("theme", "dark").await.unwrap();
        storage.remove("auth_token").await.unwrap();

        assert_eq!(storage.get("auth_token").await.unwrap(), None);
        assert_eq!(storage.get("theme").await.unwrap().as_deref(), Some("dark"));
    }

    fn corrupt(dir: &TempDir) -> FileKeyValueStorage {
        let storage = storage_in(dir);
        std::fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        std::fs::write(storage.path(), "not json").unwrap();
        storage
    }

    #[tokio::test]
    async fn test_corrupt_file_read_names_the_path() {
        let dir = TempDir::new().unwrap();
        let storage = corrupt(&dir);

        let err = storage.get("auth_token").await.unwrap_err();
        match err {
            StorageError::Serialization(reason) => {
                assert!(reason.contains(&storage.path().display().to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_set_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let storage = corrupt(&dir);

        storage.set("auth_token", "tok").await.unwrap();

        assert_eq!(storage.get("auth_token").await.unwrap().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_remove_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let storage = corrupt(&dir);

        storage.remove("auth_token").await.unwrap();

        assert_eq!(storage.get("auth_token").await.unwrap(), None);
        assert_eq!(std::fs::read_to_string(storage.path()).unwrap(), "{}\n");
    }
}
