//! JSON-file record store for client records.
//!
//! Every record lives in a single JSON array on disk. Each mutating call
//! reads the whole array, changes it in memory and writes the whole array
//! back. There is no locking: two processes that read, modify and write at
//! the same time can lose one of the writes (last writer wins).

mod records;

use thiserror::Error;

pub use records::{new_record_id, RecordStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize client records: {0}")]
    Serialize(#[from] serde_json::Error),
}
