//! Candidate resolution: turn a glob pattern into an ordered list of entry files.

use shared_types::AppIdentifier;
use std::path::PathBuf;

use super::errors::SequencerError;

/// An entry file selected for sequencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Label used in logs and errors: the path as matched.
    pub name: String,
    pub identifier: Option<AppIdentifier>,
}

/// Expand `pattern` into candidates in lexicographic path order.
///
/// `identifier` is hex; an empty string means no identifier. It is decoded
/// here so a malformed value fails the run before anything is written.
///
/// # Errors
///
/// - `Identifier` if `identifier` is not valid hex
/// - `Glob` if the pattern is malformed or a match cannot be read
/// - `NoEntries` if nothing matches
pub fn resolve_candidates(
    pattern: &str,
    identifier: Option<&str>,
) -> Result<Vec<Candidate>, SequencerError> {
    let identifier = match identifier.filter(|id| !id.is_empty()) {
        Some(hex) => Some(AppIdentifier::from_hex(hex)?),
        None => None,
    };

    let glob_err = |reason: String| SequencerError::Glob {
        pattern: pattern.to_string(),
        reason,
    };
    let mut paths = glob::glob(pattern)
        .map_err(|e| glob_err(e.to_string()))?
        .collect::<Result<Vec<PathBuf>, _>>()
        .map_err(|e| glob_err(e.to_string()))?;

    if paths.is_empty() {
        return Err(SequencerError::NoEntries {
            pattern: pattern.to_string(),
        });
    }
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| Candidate {
            name: path.display().to_string(),
            path,
            identifier: identifier.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use std::fs;

    #[test]
    fn test_sorted_and_tagged() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt", "skip.bin"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        let pattern = format!("{}/*.txt", dir.path().display());

        let candidates = resolve_candidates(&pattern, Some("aa")).unwrap();
        let names: Vec<_> = candidates
            .iter()
            .map(|c| c.path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
        assert!(candidates
            .iter()
            .all(|c| c.identifier == Some(AppIdentifier::from_bytes(vec![0xaa]))));
        assert_eq!(candidates[0].name, dir.path().join("a.txt").display().to_string());
    }

    #[test]
    fn test_empty_identifier_means_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a"), b"a").unwrap();
        let pattern = format!("{}/a", dir.path().display());

        let candidates = resolve_candidates(&pattern, Some("")).unwrap();
        assert_eq!(candidates[0].identifier, None);
    }

    #[test]
    fn test_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.none", dir.path().display());

        let err = resolve_candidates(&pattern, None).unwrap_err();
        assert!(matches!(err, SequencerError::NoEntries { .. }));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_malformed_pattern() {
        let err = resolve_candidates("entries/[", None).unwrap_err();
        assert!(matches!(err, SequencerError::Glob { .. }));
    }

    #[test]
    fn test_malformed_identifier_checked_first() {
        let err = resolve_candidates("entries/[", Some("zz")).unwrap_err();
        assert!(matches!(err, SequencerError::Identifier(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
