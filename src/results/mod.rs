//! Concurrency-safe accumulation of extracted records
//!
//! Detail fetches complete in whatever order the network decides, so the
//! sink promises nothing about record order. It only guarantees that
//! every append lands exactly once.

use crate::record::Record;
use std::sync::{Arc, Mutex};

/// Shared handle to the growing record collection.
///
/// Cloning the sink clones the handle, not the contents: every clone
/// appends into the same sequence. The guard is held only for the push,
/// never across I/O.
#[derive(Debug, Clone, Default)]
pub struct RecordSink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl RecordSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record. Safe to call from any number of tasks.
    pub fn append(&self, record: Record) {
        self.records.lock().unwrap().push(record);
    }

    /// Returns a copy of the current contents.
    ///
    /// The engine reads this only after it has gone quiescent; there are
    /// no concurrent writers at that point.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encodes records as the single-line JSON array emitted at the end of a
/// run.
pub fn to_json_line(records: &[Record]) -> crate::Result<String> {
    Ok(serde_json::to_string(records)?)
}
