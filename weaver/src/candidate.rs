//! Candidates: named binary blobs eligible for embedding.
//!
//! Candidates are supplied by the host — typically the artefact's own binary
//! dependencies — either as in-memory bytes or as filesystem paths whose
//! content is read lazily during synthesis. The weaving core never discovers
//! candidates itself; [`candidates_from_dir`] is a convenience for hosts that
//! enumerate a directory rather than passing an explicit list.

use crate::error::{Result, WeaveError};
use camino::{Utf8Path, Utf8PathBuf};

/// Where a candidate's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// Content already held in memory.
    Bytes(Vec<u8>),
    /// Content read from a file at synthesis time.
    Path(Utf8PathBuf),
}

/// A named binary blob eligible for embedding.
///
/// Names are assumed distinct within one weave pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Candidate name, matched against the policy filter.
    pub name: String,
    /// Content source.
    pub source: CandidateSource,
}

impl Candidate {
    /// Create a candidate from in-memory content.
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: CandidateSource::Bytes(bytes),
        }
    }

    /// Create a candidate backed by a file, named after the file stem.
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::Read`] if the path has no file name to derive a
    /// candidate name from.
    pub fn from_path(path: Utf8PathBuf) -> Result<Self> {
        let Some(stem) = path.file_stem() else {
            return Err(WeaveError::Read {
                path,
                reason: "path has no file name to derive a candidate name from".to_owned(),
            });
        };
        Ok(Self {
            name: stem.to_owned(),
            source: CandidateSource::Path(path),
        })
    }

    /// Read the candidate's full content.
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::Read`] if file-backed content cannot be read.
    pub fn read(&self) -> Result<Vec<u8>> {
        match &self.source {
            CandidateSource::Bytes(bytes) => Ok(bytes.clone()),
            CandidateSource::Path(path) => {
                std::fs::read(path.as_std_path()).map_err(|e| WeaveError::Read {
                    path: path.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Enumerate the regular files of `dir` as candidates, sorted by file name.
///
/// Sorting keeps discovery deterministic regardless of directory iteration
/// order.
///
/// # Errors
///
/// Returns [`WeaveError::Read`] if the directory cannot be enumerated.
pub fn candidates_from_dir(dir: &Utf8Path) -> Result<Vec<Candidate>> {
    let read_error = |reason: String| WeaveError::Read {
        path: dir.to_owned(),
        reason,
    };

    let mut paths = Vec::new();
    let entries = std::fs::read_dir(dir.as_std_path()).map_err(|e| read_error(e.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|e| read_error(e.to_string()))?;
        let file_type = entry.file_type().map_err(|e| read_error(e.to_string()))?;
        if !file_type.is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|p| read_error(format!("non-UTF-8 path {}", p.display())))?;
        paths.push(path);
    }
    paths.sort();

    paths.into_iter().map(Candidate::from_path).collect()
}

#[cfg(test)]
mod tests {
    //! Unit tests for candidate naming, reading, and directory enumeration.

    use super::*;

    #[test]
    fn from_path_names_by_file_stem() {
        let candidate =
            Candidate::from_path(Utf8PathBuf::from("deps/libalpha.bin")).expect("candidate");
        assert_eq!(candidate.name, "libalpha");
    }

    #[test]
    fn read_returns_in_memory_bytes() {
        let candidate = Candidate::from_bytes("libalpha", vec![1, 2, 3]);
        assert_eq!(candidate.read().expect("read"), vec![1, 2, 3]);
    }

    #[test]
    fn read_missing_file_is_fatal_read_error() {
        let candidate = Candidate::from_path(Utf8PathBuf::from("/nonexistent/libalpha.bin"))
            .expect("candidate");
        let result = candidate.read();
        assert!(matches!(result, Err(WeaveError::Read { .. })));
    }

    #[test]
    fn dir_enumeration_is_sorted_and_skips_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("zeta.bin"), b"z").expect("write");
        std::fs::write(dir.path().join("alpha.bin"), b"a").expect("write");
        std::fs::create_dir(dir.path().join("nested")).expect("mkdir");

        let dir_path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8");
        let candidates = candidates_from_dir(&dir_path).expect("enumerate");

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn missing_dir_is_read_error() {
        let result = candidates_from_dir(Utf8Path::new("/nonexistent/deps"));
        assert!(matches!(result, Err(WeaveError::Read { .. })));
    }
}
