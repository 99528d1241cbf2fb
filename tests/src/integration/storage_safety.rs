//! # Storage Safety
//!
//! Re-runs against the same storage root, index repair, and the storage lock.

use super::fixtures::*;
use shared_types::AppIdentifier;
use sl_02_log_storage::{LockError, StorageLock};
use sl_03_app_index::{FileIndexStore, IndexStore};
use sl_04_entry_sequencer::{EntrySequencer, IndexPolicy};

#[tokio::test]
async fn test_successive_batches_before_integration() {
    let log = tempfile::tempdir().unwrap();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    publish_checkpoint(log.path(), 0);
    write_entry(first.path(), "1", "one");
    write_entry(first.path(), "2", "two");
    write_entry(second.path(), "3", "three");
    write_entry(second.path(), "4", "one");

    let mut sequencer =
        EntrySequencer::from_config(config(log.path(), IndexPolicy::default())).unwrap();
    let a = sequencer
        .run(&format!("{}/*", first.path().display()), None)
        .await
        .unwrap();
    // The checkpoint still says 0; the store must not hand out 0 or 1 again.
    let b = sequencer
        .run(&format!("{}/*", second.path().display()), None)
        .await
        .unwrap();

    assert_eq!(a.sequence_numbers(), vec![0, 1]);
    assert_eq!(b.sequence_numbers(), vec![2, 0]);
    assert!(b.entries[1].is_duplicate);
}

#[tokio::test]
async fn test_repair_policy_backfills_index_once() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    publish_checkpoint(log.path(), 0);
    write_entry(inputs.path(), "a", "one");
    write_entry(inputs.path(), "b", "two");
    let pattern = format!("{}/*", inputs.path().display());
    let id = AppIdentifier::from_hex("c0ffee").unwrap();
    let index = FileIndexStore::new(log.path());

    // Sequenced without an identifier: nothing indexed.
    EntrySequencer::from_config(config(log.path(), IndexPolicy::default()))
        .unwrap()
        .run(&pattern, None)
        .await
        .unwrap();

    // Default policy leaves duplicates alone.
    let report = EntrySequencer::from_config(config(log.path(), IndexPolicy::NewEntriesOnly))
        .unwrap()
        .run(&pattern, Some("c0ffee"))
        .await
        .unwrap();
    assert_eq!(report.indexed_count(), 0);
    assert!(index.read(&id).unwrap().is_empty());

    // Repair policy backfills, and a second repair run adds nothing.
    for expected_writes in [2, 0] {
        let report =
            EntrySequencer::from_config(config(log.path(), IndexPolicy::IncludeDuplicates))
                .unwrap()
                .run(&pattern, Some("c0ffee"))
                .await
                .unwrap();
        assert_eq!(report.indexed_count(), expected_writes);
        assert_eq!(index.read(&id).unwrap().indices, vec![0, 1]);
    }
}

#[tokio::test]
async fn test_locked_root_refuses_second_run() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    publish_checkpoint(log.path(), 0);
    write_entry(inputs.path(), "a", "one");

    let held = StorageLock::acquire(log.path()).unwrap();
    assert!(matches!(
        StorageLock::acquire(log.path()),
        Err(LockError::AlreadyLocked { .. })
    ));

    // The holder can still sequence while locked.
    let report = EntrySequencer::from_config(config(log.path(), IndexPolicy::default()))
        .unwrap()
        .run(&format!("{}/*", inputs.path().display()), None)
        .await
        .unwrap();
    assert_eq!(report.sequence_numbers(), vec![0]);

    drop(held);
    StorageLock::acquire(log.path()).unwrap();
}
