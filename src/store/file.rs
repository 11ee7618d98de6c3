use super::{KeyValueStore, StoreError, StoreResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Store backed by a single JSON object file (`{"key": "value", ...}`)
///
/// The whole map is held in memory and the file is rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file, handling corruption gracefully
    ///
    /// A missing file opens as an empty store. A malformed file is backed up
    /// to `<name>.bak` and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let entries = match serde_json::from_str::<BTreeMap<String, String>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Failed to parse store file: {}. Backing up and starting fresh.",
                    e
                );

                let backup_path = backup_path(&path);
                if let Err(backup_err) = fs::rename(&path, &backup_path) {
                    tracing::warn!("Failed to backup corrupt store file: {}", backup_err);
                }

                BTreeMap::new()
            }
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the map to disk using atomic replace
    fn flush(&self) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&parent)?;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;

        temp_file
            .persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;

        Ok(())
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.path.file_name().is_none() {
            return Err(StoreError::InvalidPath(self.path.display().to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path().join("store.json")).unwrap();

        assert_eq!(store.get("menuItems").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("activeItemId", "1").unwrap();
            store.set("menuItems", "[]").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("activeItemId").unwrap(), Some("1".to_string()));
        assert_eq!(store.get("menuItems").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("activeItemId", "0").unwrap();
        store.remove("activeItemId").unwrap();
        store.remove("never-set").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("activeItemId").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_backed_up() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("menuItems").unwrap(), None);
        assert!(temp.path().join("store.json.bak").exists());
        assert!(!path.exists());
    }
}
