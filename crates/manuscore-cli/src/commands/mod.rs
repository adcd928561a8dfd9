//! Subcommand implementations.

pub mod cite;
pub mod delete;
pub mod evaluate;
pub mod export;
pub mod init;
pub mod questions;
pub mod records;
pub mod session;
pub mod show;

use std::path::PathBuf;

use anyhow::Result;

use manuscore_core::model::{DocumentType, EvaluationMode};
use manuscore_store::config::load_config_from;
use manuscore_store::FileBlobStore;

/// Global flags shared by every subcommand.
pub struct Context {
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Context {
    /// Open the file-backed blob store for the resolved data directory.
    pub fn open_storage(&self) -> Result<FileBlobStore> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => load_config_from(self.config.as_deref())?.data_dir,
        };
        Ok(FileBlobStore::new(data_dir))
    }
}

pub fn parse_mode(s: &str) -> Result<EvaluationMode> {
    s.parse().map_err(|e: String| anyhow::anyhow!(e))
}

pub fn parse_doc_type(s: Option<&str>) -> Result<Option<DocumentType>> {
    s.map(|v| v.parse().map_err(|e: String| anyhow::anyhow!(e)))
        .transpose()
}
