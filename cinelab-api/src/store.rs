//! JSON snapshot stores for movies and reviews
//!
//! Each store owns an in-memory list plus its next-id counter and mirrors
//! the list to a single JSON file. The file is always a full pretty-printed
//! snapshot, rewritten wholesale on every create; there is no append mode,
//! no schema version field, and no atomic-rename step. A missing file is
//! treated as an empty store.
//!
//! The store object is constructed once at startup and injected into the
//! HTTP handlers behind one mutex, so id assignment, the in-memory append,
//! and the file rewrite happen in a single mutual-exclusion scope.

use cinelab_common::models::{Movie, Review};
use cinelab_common::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

/// A record type storable in a [`SnapshotStore`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

impl Record for Movie {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Record for Review {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// In-memory record list durable via full-file JSON rewrite
pub struct SnapshotStore<T: Record> {
    path: PathBuf,
    records: Vec<T>,
    next_id: i64,
}

impl<T: Record> SnapshotStore<T> {
    /// Load the store from its snapshot file
    ///
    /// A missing file yields an empty store. The next id is
    /// `max(existing ids) + 1`, then incremented in memory only; the file
    /// is never re-read between requests.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let records: Vec<T> = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;

        Ok(Self {
            path,
            records,
            next_id,
        })
    }

    /// Assign the next id, append, persist, and return the stored record
    ///
    /// A persistence failure propagates to the caller; the in-memory append
    /// is not rolled back, so memory and disk diverge until the process
    /// restarts and reloads from the file.
    pub fn create(&mut self, mut record: T) -> Result<T> {
        record.set_id(self.next_id);
        self.next_id += 1;
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Full record list in insertion order
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Rewrite the snapshot file from the in-memory list
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
