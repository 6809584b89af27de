use bytesize::ByteSize;
use std::path::PathBuf;

use crate::error::HostsError;
use crate::store::HostsFile;

/// What the backup guard did on this run.
#[derive(Debug, PartialEq, Eq)]
pub enum BackupOutcome {
    /// A backup already existed and was left alone.
    Present(PathBuf),
    /// The hosts file was copied to a fresh backup.
    Created { path: PathBuf, bytes: u64 },
}

/// Copy the hosts file to `<path>.bk` unless that backup already exists.
///
/// The backup is never refreshed, so it keeps the content from the first
/// run. Callers report an error here and carry on.
pub fn ensure(hosts: &HostsFile) -> Result<BackupOutcome, HostsError> {
    let backup = hosts.backup_path();
    if backup.exists() {
        tracing::debug!(backup = %backup.display(), "backup already present");
        return Ok(BackupOutcome::Present(backup));
    }

    let bytes = std::fs::copy(hosts.path(), &backup).map_err(|source| HostsError::Backup {
        src: hosts.path().to_path_buf(),
        dst: backup.clone(),
        source,
    })?;
    tracing::info!(
        backup = %backup.display(),
        size = %ByteSize::b(bytes),
        "created backup of hosts file"
    );
    Ok(BackupOutcome::Created { path: backup, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_creates_backup_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hosts");
        fs::write(&path, "1.1.1.1 one\n").unwrap();
        let hosts = HostsFile::new(&path);

        let outcome = ensure(&hosts).unwrap();
        assert_eq!(
            outcome,
            BackupOutcome::Created { path: dir.path().join("hosts.bk"), bytes: 12 }
        );

        fs::write(&path, "2.2.2.2 two\n").unwrap();
        let outcome = ensure(&hosts).unwrap();
        assert_eq!(outcome, BackupOutcome::Present(dir.path().join("hosts.bk")));
        assert_eq!(fs::read_to_string(dir.path().join("hosts.bk")).unwrap(), "1.1.1.1 one\n");
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let hosts = HostsFile::new(dir.path().join("hosts"));
        let err = ensure(&hosts).unwrap_err();
        assert!(matches!(err, HostsError::Backup { .. }));
        assert!(!err.is_fatal());
        assert!(!dir.path().join("hosts.bk").exists());
    }
}
