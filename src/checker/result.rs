use std::path::PathBuf;

use crate::instruction::Direction;

/// A line a pattern matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// 0-based index into the file's lines.
    pub line_index: usize,
    pub text: String,
}

/// Outcome of one applicable instruction against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Position in the global instruction order.
    pub instruction: usize,
    /// Position within the file's applicable subsequence.
    pub local_index: usize,
    pub pattern: String,
    pub direction: Direction,
    pub hits: Vec<Hit>,
}

impl MatchRecord {
    #[must_use]
    pub fn matched(&self) -> bool {
        !self.hits.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatches {
    pub file: String,
    /// One record per applicable instruction, ordered by `local_index`.
    pub records: Vec<MatchRecord>,
}

impl FileMatches {
    #[must_use]
    pub fn applicable(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn matched(&self) -> usize {
        self.records.iter().filter(|r| r.matched()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantMatches {
    pub participant: String,
    pub files: Vec<FileMatches>,
}

/// Every verdict produced by the most recent semantic check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchLog {
    pub participants: Vec<ParticipantMatches>,
}

/// Advisories surfaced before a check starts. Not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoReports,
    NoInstructions,
}

/// Step 1 listing for one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureEntry {
    pub participant: String,
    pub files: Vec<PathBuf>,
}

/// Everything a `start` invocation produced, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub notices: Vec<Notice>,
    /// Number of steps actually performed (0, 1 or 2).
    pub steps: u8,
    pub structure: Vec<StructureEntry>,
    pub match_log: Option<MatchLog>,
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
