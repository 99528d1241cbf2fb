use shared_types::fs::{create_dir_all, write_file};
use shared_types::{AppIdentifier, SequenceNumber};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{index_path, IndexEntry, IndexError};
use crate::ports::IndexStore;

/// JSON index files under a storage root.
#[derive(Debug, Clone)]
pub struct FileIndexStore {
    root: PathBuf,
}

impl FileIndexStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn location(&self, identifier: &AppIdentifier) -> (PathBuf, PathBuf) {
        let (dir, file) = index_path(&self.root, identifier);
        let path = dir.join(file);
        (dir, path)
    }

    pub(crate) fn read_entry(&self, identifier: &AppIdentifier) -> Result<IndexEntry, IndexError> {
        let (_, path) = self.location(identifier);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(IndexEntry::default()),
            Err(source) => return Err(IndexError::Read { path, source }),
        };
        serde_json::from_slice(&data).map_err(|source| IndexError::Decode { path, source })
    }

    pub(crate) fn write_entry(
        &self,
        identifier: &AppIdentifier,
        entry: &IndexEntry,
    ) -> Result<(), IndexError> {
        let (dir, path) = self.location(identifier);
        create_dir_all(&dir).map_err(|source| IndexError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let data = serde_json::to_vec(entry).map_err(IndexError::Encode)?;
        let tmp = path.with_extension("tmp");
        write_file(&tmp, &data, false)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|source| {
                let _ = fs::remove_file(&tmp);
                IndexError::Write {
                    path: path.clone(),
                    source,
                }
            })?;

        debug!(identifier = %identifier, count = entry.indices.len(), "Index entry written");
        Ok(())
    }
}

impl IndexStore for FileIndexStore {
    fn read(&self, identifier: &AppIdentifier) -> Result<IndexEntry, IndexError> {
        self.read_entry(identifier)
    }

    fn append(
        &mut self,
        identifier: &AppIdentifier,
        seq: SequenceNumber,
    ) -> Result<(), IndexError> {
        let mut entry = self.read_entry(identifier)?;
        entry.push(seq);
        self.write_entry(identifier, &entry)
    }

    fn append_if_absent(
        &mut self,
        identifier: &AppIdentifier,
        seq: SequenceNumber,
    ) -> Result<bool, IndexError> {
        let mut entry = self.read_entry(identifier)?;
        if entry.contains(seq) {
            return Ok(false);
        }
        entry.push(seq);
        self.write_entry(identifier, &entry)?;
        Ok(true)
    }
}
