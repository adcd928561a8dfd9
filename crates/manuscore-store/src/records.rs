//! The record store: create, update, delete, list.
//!
//! Every operation is a whole-collection read-modify-write against the
//! records blob. There is no locking discipline across processes; the last
//! writer wins, and a stale index is a per-call precondition failure.

use chrono::Utc;

use manuscore_core::error::Error;
use manuscore_core::model::{Record, RecordDraft};

use crate::blob::{BlobStore, RECORDS_KEY};

/// Manages the lifecycle of evaluation records against an injected blob
/// store. Exclusively owns the authoritative collection.
pub struct RecordStore<S: BlobStore> {
    storage: S,
}

impl<S: BlobStore> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The current collection, in store order. Never mutates.
    pub fn list(&self) -> Result<Vec<Record>, Error> {
        self.load()
    }

    /// Validate and persist a new record. Assigns a fresh id and timestamp
    /// and appends to the collection.
    pub fn create(&mut self, draft: RecordDraft) -> Result<Record, Error> {
        let mut records = self.load()?;
        let id = next_id(&records);
        let record = draft.into_record(id, Utc::now())?;
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    /// Replace the record at `index` in place, preserving its id and
    /// refreshing its timestamp. The collection is left unchanged on any
    /// validation failure.
    pub fn update(&mut self, index: usize, draft: RecordDraft) -> Result<Record, Error> {
        let mut records = self.load()?;
        let len = records.len();
        let slot = records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        let record = draft.into_record(slot.id, Utc::now())?;
        *slot = record.clone();
        self.save(&records)?;
        Ok(record)
    }

    /// Remove the record at `index` permanently and return it. Confirmation
    /// is the caller's policy; the store performs none.
    pub fn delete(&mut self, index: usize) -> Result<Record, Error> {
        let mut records = self.load()?;
        let len = records.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let removed = records.remove(index);
        self.save(&records)?;
        Ok(removed)
    }

    fn load(&self) -> Result<Vec<Record>, Error> {
        let Some(blob) = self.storage.read(RECORDS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!("corrupt record collection, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<(), Error> {
        let blob = serde_json::to_string(records)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.storage.write(RECORDS_KEY, &blob)?;
        Ok(())
    }
}

/// A fresh id: milliseconds since epoch, bumped past the current maximum so
/// two creates within the same time-resolution tick never collide.
fn next_id(records: &[Record]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let max = records.iter().map(|r| r.id).max().unwrap_or(0);
    now.max(max + 1)
}
