//! # Lock Tests

use super::*;
use std::fs;

#[test]
fn test_lock_acquire_creates_file() {
    let dir = tempfile::tempdir().unwrap();

    let lock = StorageLock::acquire(dir.path()).expect("Should acquire lock");
    assert!(lock.path().exists());
    assert_eq!(lock.path(), dir.path().join("LOCK"));
    assert_eq!(lock.pid(), std::process::id());
}

#[test]
fn test_lock_contains_pid() {
    let dir = tempfile::tempdir().unwrap();

    let lock = StorageLock::acquire(dir.path()).expect("Should acquire lock");
    let content = fs::read_to_string(lock.path()).unwrap();
    let stored_pid: u32 = content.trim().parse().unwrap();
    assert_eq!(stored_pid, std::process::id());
}

#[test]
fn test_second_run_is_refused() {
    let dir = tempfile::tempdir().unwrap();

    let _held = StorageLock::acquire(dir.path()).expect("First lock should succeed");
    let result = StorageLock::acquire(dir.path());

    match result {
        Err(LockError::AlreadyLocked { pid, .. }) => assert_eq!(pid, Some(std::process::id())),
        other => panic!("expected AlreadyLocked, got {:?}", other.map(|l| l.pid())),
    }
}

#[test]
fn test_lock_released_on_drop() {
    let dir = tempfile::tempdir().unwrap();

    let lock = StorageLock::acquire(dir.path()).unwrap();
    let path = lock.path().to_path_buf();
    drop(lock);
    assert!(path.exists(), "lock file stays in place");

    let again = StorageLock::acquire(dir.path()).expect("Lock should be free again");
    let content = fs::read_to_string(again.path()).unwrap();
    assert_eq!(content, format!("{}\n", std::process::id()));
}

#[test]
fn test_handle_opened_before_release_still_excludes_new_runs() {
    use fs2::FileExt;

    let dir = tempfile::tempdir().unwrap();
    let first = StorageLock::acquire(dir.path()).unwrap();

    // A competing run opens the lock file while the first run holds it...
    let early = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(first.path())
        .unwrap();
    drop(first);

    // ...and takes the lock once the first run releases it.
    early.try_lock_exclusive().expect("released lock is free");

    let third = StorageLock::acquire(dir.path());
    assert!(
        matches!(third, Err(LockError::AlreadyLocked { .. })),
        "a third run must not lock a different file while the lock is held"
    );

    #[allow(clippy::incompatible_msrv)]
    early.unlock().unwrap();
}

#[test]
fn test_missing_root_fails_to_create() {
    let dir = tempfile::tempdir().unwrap();
    let result = StorageLock::acquire(&dir.path().join("missing"));
    assert!(matches!(result, Err(LockError::CreateFailed { .. })));
}
