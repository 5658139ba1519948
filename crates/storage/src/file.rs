//! JSON file storage
//!
//! Every `persist` rewrites the whole document. The bytes go to a sibling
//! temporary file which is fsynced and then renamed over the target, so readers
//! see either the old document or the new one, never a torn write.

use crate::document::AnimalsDocument;
use crate::RecordStorage;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use zookeepr_core::{Animal, Result};

/// File-backed record storage.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage backed by the document at `path`.
    ///
    /// Nothing is touched on disk until the first `load` or `persist`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary sibling the next write is staged in.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "animals.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_staged(&self, staging: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(staging)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        Ok(())
    }
}

impl RecordStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Animal>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "No data file at {}, starting with an empty collection",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document = AnimalsDocument::from_slice(&bytes)?;
        info!(
            "Loaded {} animals from {}",
            document.animals.len(),
            self.path.display()
        );
        Ok(document.animals)
    }

    fn persist(&self, records: &[Animal]) -> Result<()> {
        let bytes = AnimalsDocument::encode(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let staging = self.staging_path();
        if let Err(e) = self.write_staged(&staging, &bytes) {
            error!("Failed to stage {}: {}", staging.display(), e);
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        if let Err(e) = fs::rename(&staging, &self.path) {
            error!(
                "Failed to move {} into place: {}",
                staging.display(),
                e
            );
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        debug!(
            "Persisted {} animals ({} bytes) to {}",
            records.len(),
            bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}
