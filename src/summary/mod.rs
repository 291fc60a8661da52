//! Per-participant, per-file ratios derived from the last semantic check.

use crate::checker::MatchLog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub file: String,
    pub matched: usize,
    pub applicable: usize,
}

impl FileResult {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.matched == self.applicable
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantResult {
    pub participant: String,
    /// Only files with at least one applicable instruction.
    pub files: Vec<FileResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// No semantic check has run since the last reset.
    Empty,
    Results(Vec<ParticipantResult>),
}

impl Summary {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn participants(&self) -> &[ParticipantResult] {
        match self {
            Self::Empty => &[],
            Self::Results(participants) => participants,
        }
    }

    /// Matched rule count across every file.
    #[must_use]
    pub fn matched_rules(&self) -> usize {
        self.file_results().map(|f| f.matched).sum()
    }

    /// Applicable rule count across every file.
    #[must_use]
    pub fn applicable_rules(&self) -> usize {
        self.file_results().map(|f| f.applicable).sum()
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.file_results().all(FileResult::passed)
    }

    fn file_results(&self) -> impl Iterator<Item = &FileResult> {
        self.participants().iter().flat_map(|p| p.files.iter())
    }
}

/// Fold a match log into ratios. `None` means no semantic check has run.
#[must_use]
pub fn summarize(log: Option<&MatchLog>) -> Summary {
    let Some(log) = log else {
        return Summary::Empty;
    };

    let participants = log
        .participants
        .iter()
        .map(|participant| ParticipantResult {
            participant: participant.participant.clone(),
            files: participant
                .files
                .iter()
                .filter(|file| file.applicable() > 0)
                .map(|file| FileResult {
                    file: file.file.clone(),
                    matched: file.matched(),
                    applicable: file.applicable(),
                })
                .collect(),
        })
        .collect();

    Summary::Results(participants)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
