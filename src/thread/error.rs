//! Thread loading and validation errors.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a thread.
#[derive(Debug, thiserror::Error)]
pub enum ThreadError {
    #[error("Failed to read thread file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse thread JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("First item must be at depth 0 (found depth {depth})")]
    RootNotAtDepthZero { depth: u32 },

    #[error("Item {index} jumps from depth {from} to depth {to}")]
    DepthJump { index: usize, from: u32, to: u32 },

    #[error("Item {index} (id {id}) arrives at {time}, before its parent at {parent_time}")]
    ArrivesBeforeParent {
        index: usize,
        id: u64,
        time: i64,
        parent_time: i64,
    },

    #[error("Item {index} has an out-of-range time {time}")]
    TimeOutOfRange { index: usize, time: i64 },

    #[error("Duplicate item id {id} at index {index}")]
    DuplicateId { index: usize, id: u64 },
}
