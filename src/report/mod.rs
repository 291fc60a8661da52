//! Imported reports: participants and their transcript files.
//!
//! A report root holds one subdirectory per participant; every regular file directly
//! inside a participant directory is one transcript. Participants keep the order the
//! filesystem yields them in, files are sorted by name. Symlinked participant
//! directories and transcripts are followed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Result, VerdictError};

/// One captured transcript, split into lines at import time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub name: String,
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl ReportFile {
    #[must_use]
    pub fn new(name: impl Into<String>, path: PathBuf, content: &str) -> Self {
        Self {
            name: name.into(),
            path,
            lines: content.lines().map(str::to_string).collect(),
        }
    }
}

/// One submission, keyed by the directory it was imported from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub files: Vec<ReportFile>,
}

#[derive(Debug, Default)]
pub struct ReportStore {
    participants: Vec<Participant>,
}

impl ReportStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    /// Import every participant directory under `root`.
    ///
    /// New participants are appended after the ones already held; importing the same root
    /// twice yields duplicates. Nothing is committed if any file fails to read.
    ///
    /// # Errors
    /// Returns `DirectoryNotFound` if `root` is missing or not a directory, and `FileRead`
    /// if a directory cannot be listed, a symlink is dangling, or a transcript cannot be
    /// read.
    pub fn import_from_directory(&mut self, root: &Path) -> Result<&[Participant]> {
        if !root.is_dir() {
            return Err(VerdictError::DirectoryNotFound);
        }

        let mut imported = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            if entry.file_type().is_dir() {
                imported.push(load_participant(entry.path())?);
            }
        }

        let start = self.participants.len();
        self.participants.extend(imported);
        info!(
            root = %root.display(),
            participants = self.participants.len() - start,
            total_files = self.file_count(),
            "imported reports"
        );
        Ok(&self.participants[start..])
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Total number of files across all participants.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.participants.iter().map(|p| p.files.len()).sum()
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }
}

fn load_participant(dir: &Path) -> Result<Participant> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let bytes = fs::read(&path).map_err(|source| VerdictError::FileRead {
            path: path.clone(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(file = %path.display(), bytes = bytes.len(), "read transcript");
        files.push(ReportFile::new(name, path, &String::from_utf8_lossy(&bytes)));
    }

    Ok(Participant {
        id: dir.display().to_string(),
        files,
    })
}

/// Converts a walk failure into `FileRead` against the entry it failed on.
fn walk_error(dir: &Path, err: walkdir::Error) -> VerdictError {
    let path = err.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    VerdictError::FileRead { path, source }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
