//! Named string-blob storage.
//!
//! The persisted state of the whole system is two named blobs: a JSON array
//! of records and an opaque current-user marker. The [`BlobStore`] trait
//! keeps consumers independent of where those blobs live.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Blob key holding the persisted record collection.
pub const RECORDS_KEY: &str = "manuscoreRecords";

/// Blob key holding the current-user presence marker.
pub const SESSION_KEY: &str = "manuscoreUser";

/// Abstract interface over named string blobs.
pub trait BlobStore {
    /// Read a blob, returning `None` when the key has never been written.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Write a blob, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Remove a blob. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// File-backed blob storage: one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory blobs are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory blob storage for tests. No persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}
