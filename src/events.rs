use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome emitted while handling one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    EntryListed {
        index: usize,
        line: String,
    },
    EntryAdded {
        line: String,
    },
    EntryDeleted {
        index: i64,
        /// `None` when the index matched no line.
        removed: Option<String>,
    },
    BackupCreated {
        path: PathBuf,
        bytes: u64,
    },
    BackupFailed {
        error: String,
    },
    Failed {
        error: String,
    },
}
