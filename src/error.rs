use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::args::Action;

/// Failures while editing the hosts file.
#[derive(Debug, Error)]
pub enum HostsError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {} for appending", path.display())]
    OpenAppend {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {} for rewriting", path.display())]
    OpenRewrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}", src.display(), dst.display())]
    Backup {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read index from input")]
    Prompt(#[source] io::Error),

    #[error("`{action}` expects {expected}")]
    MissingOperands { action: Action, expected: &'static str },
}

impl HostsError {
    /// Whether the error aborts the run instead of being reported as an
    /// operational failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HostsError::Read { .. })
    }
}
