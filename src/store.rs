//! The hosts file as an ordered sequence of lines.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::HostsError;

/// Suffix appended to the hosts file name to form the backup path.
pub const BACKUP_SUFFIX: &str = ".bk";

/// One line of the hosts file, as raw bytes without its `\n`.
pub type Line = Vec<u8>;

/// Handle on the hosts file being edited.
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path holding the one-time backup, `<path>.bk`.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Read the whole file and split it on `\n`.
    ///
    /// A trailing newline yields a final empty entry, so indices match the
    /// positions a reader would count in the raw text. Content is not
    /// required to be UTF-8.
    pub fn load(&self) -> Result<Vec<Line>, HostsError> {
        let content = std::fs::read(&self.path).map_err(|source| HostsError::Read {
            path: self.path.clone(),
            source,
        })?;
        let lines = split_lines(&content);
        tracing::debug!(path = %self.path.display(), lines = lines.len(), "loaded hosts file");
        Ok(lines)
    }

    /// Append `line` at the end of the file, without a newline.
    ///
    /// The file must already exist.
    pub fn append(&self, line: &str) -> Result<(), HostsError> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| HostsError::OpenAppend {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(line.as_bytes()).map_err(|source| HostsError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), line, "appended entry");
        Ok(())
    }

    /// Truncate the file and write back every line except `skip`, each
    /// followed by `\n`.
    ///
    /// Kept lines are written back byte for byte. Returns the removed line,
    /// if `skip` was in range. There is no rollback: a failed write leaves
    /// the file as far as it got.
    pub fn rewrite_without(
        &self,
        lines: &[Line],
        skip: Option<usize>,
    ) -> Result<Option<Line>, HostsError> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| HostsError::OpenRewrite {
                path: self.path.clone(),
                source,
            })?;
        let write_err = |source| HostsError::Write {
            path: self.path.clone(),
            source,
        };

        let mut writer = BufWriter::new(file);
        let mut removed = None;
        for (index, line) in retained_lines(lines) {
            if Some(index) == skip {
                removed = Some(line.to_vec());
                continue;
            }
            writer.write_all(line).map_err(write_err)?;
            writer.write_all(b"\n").map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;

        tracing::info!(
            path = %self.path.display(),
            skip,
            removed = removed.is_some(),
            "rewrote hosts file"
        );
        Ok(removed)
    }
}

/// Split file content on `\n`, keeping empty entries including the last.
pub fn split_lines(content: &[u8]) -> Vec<Line> {
    content.split(|&byte| byte == b'\n').map(<[u8]>::to_vec).collect()
}

/// Indexed lines worth writing back: everything but the empty entry that a
/// trailing newline leaves at the end.
fn retained_lines(lines: &[Line]) -> impl Iterator<Item = (usize, &[u8])> {
    let end = match lines.last() {
        Some(last) if last.is_empty() => lines.len() - 1,
        _ => lines.len(),
    };
    lines[..end].iter().map(Vec::as_slice).enumerate()
}
