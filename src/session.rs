//! Mutable state of one verification session.
//!
//! Reports and instructions accumulate across imports until `reset`. The match log is
//! replaced every time a semantic check actually runs.

use std::path::Path;

use tracing::info;

use crate::checker::{CheckEngine, CheckOutcome, CheckStep, MatchLog};
use crate::error::Result;
use crate::instruction::{Instruction, InstructionSet};
use crate::report::{Participant, ReportStore};
use crate::summary::{Summary, summarize};

#[derive(Debug, Default)]
pub struct Session {
    reports: ReportStore,
    instructions: InstructionSet,
    last_log: Option<MatchLog>,
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: ReportStore::new(),
            instructions: InstructionSet::new(),
            last_log: None,
        }
    }

    /// Clear reports, instructions and the last match log.
    pub fn reset(&mut self) {
        self.reports.clear();
        self.instructions.clear();
        self.last_log = None;
        info!("session reset");
    }

    /// # Errors
    /// See [`ReportStore::import_from_directory`].
    pub fn add_reports(&mut self, root: &Path) -> Result<&[Participant]> {
        self.reports.import_from_directory(root)
    }

    /// # Errors
    /// See [`InstructionSet::import_from_json`].
    pub fn add_instructions(&mut self, path: &Path) -> Result<&[Instruction]> {
        self.instructions.import_from_json(path)
    }

    /// # Errors
    /// See [`InstructionSet::add_manual`].
    pub fn add_regex<S: AsRef<str>>(
        &mut self,
        pattern: &str,
        direction: &str,
        files: &[S],
    ) -> Result<&Instruction> {
        self.instructions.add_manual(pattern, direction, files)
    }

    /// Run checks up to `step`, keeping the match log if the semantic step ran.
    pub fn start(&mut self, step: CheckStep) -> CheckOutcome {
        let outcome = CheckEngine::new(&self.reports, &self.instructions).run(step);
        if let Some(log) = &outcome.match_log {
            self.last_log = Some(log.clone());
        }
        outcome
    }

    #[must_use]
    pub fn conclude(&self) -> Summary {
        summarize(self.last_log.as_ref())
    }

    #[must_use]
    pub const fn reports(&self) -> &ReportStore {
        &self.reports
    }

    #[must_use]
    pub const fn instructions(&self) -> &InstructionSet {
        &self.instructions
    }

    #[must_use]
    pub const fn last_log(&self) -> Option<&MatchLog> {
        self.last_log.as_ref()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
