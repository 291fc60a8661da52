use regex::Regex;
use tracing::{debug, info};

use crate::instruction::InstructionSet;
use crate::report::{ReportFile, ReportStore};

use super::CheckStep;
use super::result::{
    CheckOutcome, FileMatches, Hit, MatchLog, MatchRecord, Notice, ParticipantMatches,
    StructureEntry,
};

/// Runs the syntax and semantic checks over borrowed stores.
///
/// The engine holds no state of its own; running it twice over unchanged stores yields
/// identical outcomes.
pub struct CheckEngine<'a> {
    reports: &'a ReportStore,
    instructions: &'a InstructionSet,
}

impl<'a> CheckEngine<'a> {
    #[must_use]
    pub const fn new(reports: &'a ReportStore, instructions: &'a InstructionSet) -> Self {
        Self {
            reports,
            instructions,
        }
    }

    /// Run checks up to `step`.
    ///
    /// The semantic step is skipped when no instructions are loaded; nothing runs when no
    /// reports are loaded. Skips are surfaced as notices.
    #[must_use]
    pub fn run(&self, step: CheckStep) -> CheckOutcome {
        let mut notices = Vec::new();
        if self.instructions.is_empty() {
            notices.push(Notice::NoInstructions);
        }
        if self.reports.is_empty() {
            notices.push(Notice::NoReports);
            return CheckOutcome {
                notices,
                steps: 0,
                structure: Vec::new(),
                match_log: None,
            };
        }

        let structure = self.syntax_check();
        let match_log = (step == CheckStep::Semantic && !self.instructions.is_empty())
            .then(|| self.semantic_check());
        let steps = if match_log.is_some() { 2 } else { 1 };

        info!(
            requested = step.number(),
            steps,
            participants = structure.len(),
            "check finished"
        );

        CheckOutcome {
            notices,
            steps,
            structure,
            match_log,
        }
    }

    fn syntax_check(&self) -> Vec<StructureEntry> {
        self.reports
            .participants()
            .iter()
            .map(|participant| StructureEntry {
                participant: participant.id.clone(),
                files: participant.files.iter().map(|f| f.path.clone()).collect(),
            })
            .collect()
    }

    fn semantic_check(&self) -> MatchLog {
        let participants = self
            .reports
            .participants()
            .iter()
            .map(|participant| ParticipantMatches {
                participant: participant.id.clone(),
                files: participant
                    .files
                    .iter()
                    .map(|file| self.check_file(file))
                    .collect(),
            })
            .collect();

        MatchLog { participants }
    }

    /// Evaluate the file's applicable instructions, re-indexed from 0.
    fn check_file(&self, file: &ReportFile) -> FileMatches {
        let records: Vec<MatchRecord> = self
            .instructions
            .applicable_to(&file.name)
            .enumerate()
            .map(|(local_index, (instruction_index, instruction))| MatchRecord {
                instruction: instruction_index,
                local_index,
                pattern: instruction.source().to_string(),
                direction: instruction.direction,
                hits: find_hits(&instruction.pattern, &file.lines),
            })
            .collect();

        debug!(
            file = %file.path.display(),
            applicable = records.len(),
            matched = records.iter().filter(|r| r.matched()).count(),
            "checked file"
        );

        FileMatches {
            file: file.name.clone(),
            records,
        }
    }
}

/// Every line `pattern` matches anywhere in, in line order.
fn find_hits(pattern: &Regex, lines: &[String]) -> Vec<Hit> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(line_index, line)| Hit {
            line_index,
            text: line.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
