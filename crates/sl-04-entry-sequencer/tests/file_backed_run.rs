//! Runs against the file store and file index in a temporary storage root.

use shared_crypto::{Ed25519KeyPair, NoteSigner};
use sl_01_checkpoint::Checkpoint;
use sl_04_entry_sequencer::{EntrySequencer, ErrorKind, SequencerConfig};
use std::fs;

const ORIGIN: &str = "files.example/log";

fn publish(root: &std::path::Path, signer: &NoteSigner, size: u64) {
    let body = Checkpoint {
        origin: ORIGIN.to_string(),
        size,
        root_hash: [1; 32],
        extensions: vec![],
        signatures: vec![],
    }
    .marshal_body();
    fs::write(root.join("checkpoint"), signer.sign(&body).unwrap()).unwrap();
}

#[tokio::test]
async fn test_file_backed_run_and_rerun() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    let signer = NoteSigner::new(ORIGIN, Ed25519KeyPair::from_seed([5; 32])).unwrap();
    publish(log.path(), &signer, 0);
    fs::write(inputs.path().join("a.entry"), b"first").unwrap();
    fs::write(inputs.path().join("b.entry"), b"second").unwrap();
    let pattern = format!("{}/*.entry", inputs.path().display());

    let config = SequencerConfig::new(log.path(), ORIGIN, signer.verifier().clone().into());
    let mut sequencer = EntrySequencer::from_config(config).unwrap();

    let first = sequencer.run(&pattern, None).await.unwrap();
    assert_eq!(first.sequence_numbers(), vec![0, 1]);
    assert_eq!(first.new_count(), 2);

    let second = sequencer.run(&pattern, None).await.unwrap();
    assert_eq!(second.sequence_numbers(), vec![0, 1]);
    assert_eq!(second.duplicate_count(), 2);
}

#[tokio::test]
async fn test_storage_root_without_checkpoint() {
    let log = tempfile::tempdir().unwrap();
    let inputs = tempfile::tempdir().unwrap();
    let signer = NoteSigner::new(ORIGIN, Ed25519KeyPair::from_seed([5; 32])).unwrap();
    fs::write(inputs.path().join("a.entry"), b"first").unwrap();

    let config = SequencerConfig::new(log.path(), ORIGIN, signer.verifier().clone().into());
    let err = EntrySequencer::from_config(config)
        .unwrap()
        .run(&format!("{}/*.entry", inputs.path().display()), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Checkpoint);
    assert_eq!(fs::read_dir(log.path()).unwrap().count(), 0);
}
