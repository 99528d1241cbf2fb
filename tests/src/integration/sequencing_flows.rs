//! # Sequencing Flows
//!
//! Checkpoint gate, file store, and file index working together through
//! `EntrySequencer`.

use super::fixtures::*;
use shared_types::AppIdentifier;
use sl_01_checkpoint::CheckpointError;
use sl_03_app_index::{index_path, FileIndexStore, IndexStore};
use sl_04_entry_sequencer::{
    Candidate, EntrySequencer, ErrorKind, IndexPolicy, SequencerError,
};
use std::fs;

fn aa() -> AppIdentifier {
    AppIdentifier::from_hex("aa").unwrap()
}

#[tokio::test]
async fn test_mixed_tagged_and_untagged_entries() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    publish_checkpoint(log.path(), 0);

    let candidates = vec![
        ("first.entry", "alpha", Some(aa())),
        ("second.entry", "bravo", None),
        ("third.entry", "charlie", Some(aa())),
    ]
    .into_iter()
    .map(|(name, contents, identifier)| Candidate {
        path: write_entry(inputs.path(), name, contents),
        name: name.to_string(),
        identifier,
    })
    .collect();

    let mut sequencer =
        EntrySequencer::from_config(config(log.path(), IndexPolicy::default())).unwrap();
    let report = sequencer.run_candidates(candidates).await.unwrap();

    let seqs = report.sequence_numbers();
    assert_eq!(seqs, vec![0, 1, 2]);
    assert_eq!(report.new_count(), 3);
    assert_eq!(report.indexed_count(), 2);

    let index = FileIndexStore::new(log.path());
    assert_eq!(index.read(&aa()).unwrap().indices, vec![seqs[0], seqs[2]]);

    // Only the `aa` entry exists under the index directory.
    let index_files = files_under(&log.path().join("index"));
    let (aa_dir, aa_file) = index_path(log.path(), &aa());
    assert_eq!(index_files, vec![aa_dir.join(aa_file)]);
}

#[tokio::test]
async fn test_glob_run_with_identifier() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    publish_checkpoint(log.path(), 0);
    write_entry(inputs.path(), "b.entry", "two");
    write_entry(inputs.path(), "a.entry", "one");
    write_entry(inputs.path(), "c.entry", "one");

    let mut sequencer =
        EntrySequencer::from_config(config(log.path(), IndexPolicy::default())).unwrap();
    let report = sequencer
        .run(&format!("{}/*.entry", inputs.path().display()), Some("aa"))
        .await
        .unwrap();

    let dir_prefix = format!("{}/", inputs.path().display());
    let lines: Vec<String> = report
        .entries
        .iter()
        .map(|e| e.log_line().replacen(&dir_prefix, "", 1))
        .collect();
    assert_eq!(lines, vec!["0: a.entry", "1: b.entry", "0: c.entry (dupe)"]);

    let index = FileIndexStore::new(log.path());
    assert_eq!(index.read(&aa()).unwrap().indices, vec![0, 1]);
}

#[tokio::test]
async fn test_cosigned_checkpoint_with_extensions() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    let body = checkpoint_body(3, &["timestamp 1700000000"]);
    fs::write(log.path().join("checkpoint"), cosigned(&body, &[witness_signer()])).unwrap();
    write_entry(inputs.path(), "x.entry", "x");

    let mut sequencer =
        EntrySequencer::from_config(config(log.path(), IndexPolicy::default())).unwrap();
    let report = sequencer
        .run(&format!("{}/*.entry", inputs.path().display()), None)
        .await
        .unwrap();

    assert_eq!(report.checkpoint_size, 3);
    assert_eq!(report.sequence_numbers(), vec![3]);
}

#[tokio::test]
async fn test_tampered_checkpoint_writes_nothing() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    let signed = log_signer().sign(&checkpoint_body(0, &[])).unwrap();
    // Same origin line, different size: the signature no longer matches.
    let tampered = signed.replacen("\n0\n", "\n9\n", 1);
    fs::write(log.path().join("checkpoint"), tampered).unwrap();
    write_entry(inputs.path(), "x.entry", "x");

    let err = EntrySequencer::from_config(config(log.path(), IndexPolicy::default()))
        .unwrap()
        .run(&format!("{}/*.entry", inputs.path().display()), Some("aa"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Checkpoint);
    assert!(matches!(err, SequencerError::Checkpoint(CheckpointError::Signature(_))));
    assert_eq!(files_under(log.path()), vec![log.path().join("checkpoint")]);
}

#[tokio::test]
async fn test_missing_storage_root() {
    let base = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    write_entry(inputs.path(), "x.entry", "x");

    let absent = base.path().join("absent");
    let err = EntrySequencer::from_config(config(&absent, IndexPolicy::default()))
        .unwrap()
        .run(&format!("{}/*.entry", inputs.path().display()), None)
        .await
        .unwrap_err();

    // The checkpoint read fails before the store is ever opened.
    assert_eq!(err.kind(), ErrorKind::Checkpoint);
    assert!(!absent.exists());
}
