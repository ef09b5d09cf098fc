//! JSON file local store
//!
//! Keeps the whole flat namespace in one JSON object on disk. The file is read
//! once at open and rewritten on every `set` through a sibling temp file and
//! a rename, so a crash mid-write leaves the previous contents intact.

use sitekv_domain::error::{Error, Result};
use sitekv_domain::ports::LocalStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// File-backed local store
#[derive(Debug)]
pub struct FileLocalStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileLocalStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is set aside as `<name>.corrupt` and the store starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    let backup = path.with_extension("corrupt");
                    warn!(
                        path = %path.display(),
                        backup = %backup.display(),
                        error = %e,
                        "Local store file is unreadable, starting empty"
                    );
                    fs::rename(&path, &backup).map_err(|e| {
                        Error::local_store_with_source(
                            format!("Failed to set aside corrupt file {}", path.display()),
                            e,
                        )
                    })?;
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(Error::local_store_with_source(
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "Local store opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::local_store_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content).map_err(|e| {
            Error::local_store_with_source(format!("Failed to write {}", tmp.display()), e)
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::local_store_with_source(format!("Failed to replace {}", self.path.display()), e)
        })
    }
}

impl LocalStore for FileLocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_file(&entries) {
            // Keep memory and disk in step: a failed write leaves no trace.
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
