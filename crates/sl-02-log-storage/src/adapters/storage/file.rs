use shared_types::fs::{create_dir_all, write_file};
use shared_types::{LeafHash, SequenceNumber, SequenceResult};
use sl_01_checkpoint::CheckpointSource;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::domain::errors::StorageError;
use crate::domain::layout;
use crate::ports::outbound::{LogStorage, SequenceStore};

/// Filesystem-backed log storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileLogStorage {
    root: PathBuf,
}

impl FileLogStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CheckpointSource for FileLogStorage {
    fn read_checkpoint(&self) -> io::Result<Vec<u8>> {
        fs::read(layout::checkpoint_path(&self.root))
    }
}

impl LogStorage for FileLogStorage {
    type Store = FileSequenceStore;

    fn load(&self, size: u64) -> Result<FileSequenceStore, StorageError> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(StorageError::InvalidRoot {
                    path: self.root.clone(),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::InvalidRoot {
                    path: self.root.clone(),
                })
            }
            Err(e) => return Err(StorageError::io(&self.root, e)),
        }

        info!(root = %self.root.display(), size, "Loaded log storage");
        Ok(FileSequenceStore {
            root: self.root.clone(),
            next_seq: size,
        })
    }
}

/// Sequencing handle over a [`FileLogStorage`] root.
///
/// Allocation starts at the checkpoint size and walks forward over numbers
/// already holding a payload, so leaves sequenced but not yet integrated by an
/// earlier run are never overwritten.
#[derive(Debug)]
pub struct FileSequenceStore {
    root: PathBuf,
    next_seq: SequenceNumber,
}

impl FileSequenceStore {
    /// Next number this store would try to allocate.
    pub fn next_seq(&self) -> SequenceNumber {
        self.next_seq
    }

    fn read_leaf_record(&self, path: &Path) -> Result<Option<SequenceNumber>, StorageError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(path, e)),
        };
        SequenceNumber::from_str_radix(contents.trim(), 16)
            .map(Some)
            .map_err(|_| StorageError::CorruptLeafRecord {
                path: path.to_path_buf(),
                contents,
            })
    }
}

impl SequenceStore for FileSequenceStore {
    fn sequence(
        &mut self,
        leaf_hash: &LeafHash,
        leaf: &[u8],
    ) -> Result<SequenceResult, StorageError> {
        let (leaf_dir, leaf_file) = layout::leaf_path(&self.root, leaf_hash);
        let leaf_record = leaf_dir.join(&leaf_file);

        if let Some(seq) = self.read_leaf_record(&leaf_record)? {
            debug!(seq, leaf = %leaf_hash, "Leaf already sequenced");
            return Ok(SequenceResult::duplicate(seq));
        }

        loop {
            let seq = self.next_seq;
            if seq == SequenceNumber::MAX {
                return Err(StorageError::Exhausted { next: seq });
            }

            let (seq_dir, seq_file) = layout::seq_path(&self.root, seq);
            create_dir_all(&seq_dir).map_err(|e| StorageError::io(&seq_dir, e))?;

            // Write under a temporary name and hard-link into place so a
            // number that is already taken is detected, not overwritten.
            let final_path = seq_dir.join(&seq_file);
            let tmp_path = seq_dir.join(format!("{}.tmp", seq_file));
            write_file(&tmp_path, leaf, false).map_err(|e| StorageError::io(&tmp_path, e))?;

            let linked = fs::hard_link(&tmp_path, &final_path);
            let _ = fs::remove_file(&tmp_path);
            match linked {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    warn!(seq, "Sequence number already taken, skipping");
                    self.next_seq += 1;
                    continue;
                }
                Err(e) => return Err(StorageError::io(&final_path, e)),
            }

            create_dir_all(&leaf_dir).map_err(|e| StorageError::io(&leaf_dir, e))?;
            write_file(&leaf_record, format!("{:x}", seq).as_bytes(), true)
                .map_err(|e| StorageError::io(&leaf_record, e))?;

            self.next_seq += 1;
            debug!(seq, leaf = %leaf_hash, "Leaf sequenced");
            return Ok(SequenceResult::assigned(seq));
        }
    }
}
