//! # Storage Lock
//!
//! Uses `fs2` for cross-platform advisory locking (flock on Unix, LockFile on Windows).
//! The lock is advisory: it only excludes other writers that also take it.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

/// Errors from locking a storage root.
#[derive(Debug)]
pub enum LockError {
    /// Lock file could not be opened.
    CreateFailed { path: PathBuf, source: io::Error },
    /// Another run holds the lock.
    AlreadyLocked { pid: Option<u32>, path: PathBuf },
    /// Failed to record our PID in the lock file.
    WriteFailed(io::Error),
}

impl std::fmt::Display for LockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockError::CreateFailed { path, source } => {
                write!(f, "Failed to open lock file {}: {}", path.display(), source)
            }
            LockError::AlreadyLocked { pid: Some(pid), path } => {
                write!(f, "Log storage is being sequenced by process {} ({})", pid, path.display())
            }
            LockError::AlreadyLocked { pid: None, path } => {
                write!(f, "Log storage is being sequenced by another process ({})", path.display())
            }
            LockError::WriteFailed(e) => write!(f, "Failed to write PID to lock file: {}", e),
        }
    }
}

impl std::error::Error for LockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LockError::CreateFailed { source, .. } => Some(source),
            LockError::WriteFailed(e) => Some(e),
            LockError::AlreadyLocked { .. } => None,
        }
    }
}

/// Exclusive lock on a log storage root, released on drop.
///
/// The `LOCK` file itself persists between runs.
///
/// ```ignore
/// let _lock = StorageLock::acquire(Path::new("/srv/log"))?;
/// // sequence entries while `_lock` is alive
/// ```
pub struct StorageLock {
    file: File,
    path: PathBuf,
    pid: u32,
}

impl StorageLock {
    /// Lock file name inside the storage root.
    pub const LOCK_FILE: &'static str = "LOCK";

    /// Take the lock without waiting.
    ///
    /// # Errors
    ///
    /// `LockError::AlreadyLocked` if another run holds it.
    pub fn acquire(root: &Path) -> Result<Self, LockError> {
        let path = root.join(Self::LOCK_FILE);

        // Not truncated before locking: the holder's PID must survive a failed attempt.
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::CreateFailed {
                path: path.clone(),
                source,
            })?;

        if file.try_lock_exclusive().is_err() {
            return Err(LockError::AlreadyLocked {
                pid: Self::read_existing_pid(&path),
                path,
            });
        }

        let pid = std::process::id();
        let mut file = file;
        file.set_len(0).map_err(LockError::WriteFailed)?;
        writeln!(file, "{}", pid).map_err(LockError::WriteFailed)?;
        file.sync_all().map_err(LockError::WriteFailed)?;

        debug!(path = %path.display(), pid, "Acquired storage lock");
        Ok(Self { file, path, pid })
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing_pid(path: &Path) -> Option<u32> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

// The lock file is left in place: unlinking it after unlocking would let a
// run that already opened the old file and a run creating a new one both
// hold a lock.
impl Drop for StorageLock {
    fn drop(&mut self) {
        #[allow(clippy::incompatible_msrv)]
        let _ = self.file.unlock();
    }
}
