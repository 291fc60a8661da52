use std::fmt::Write;

use crate::checker::{CheckOutcome, FileMatches, MatchLog, MatchRecord, Notice};
use crate::instruction::{Instruction, InstructionSet, Scope};
use crate::report::{Participant, ReportStore};
use crate::summary::{FileResult, Summary};

use super::{ColorMode, ansi, is_no_color_set};

pub const RESET_MESSAGE: &str = " ==[ All progress is reset!! ]==";
pub const EXIT_MESSAGE: &str = "==[ Exiting! ]==";

/// Renders session state and check transcripts as plain terminal text.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if is_no_color_set() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn ratio_color(matched: usize, applicable: usize) -> &'static str {
        if matched == applicable {
            ansi::GREEN
        } else if matched == 0 {
            ansi::RED
        } else {
            ansi::YELLOW
        }
    }

    /// `Success` followed by one `<participant>   <file>` line per imported file.
    #[must_use]
    pub fn format_added_reports(&self, added: &[Participant]) -> String {
        let mut output = String::new();
        writeln!(output, "{}", self.colorize("Success", ansi::GREEN)).ok();
        for participant in added {
            for file in &participant.files {
                writeln!(output, "{}   {}", participant.id, file.name).ok();
            }
        }
        output
    }

    #[must_use]
    pub fn format_added_instructions<'a, I>(&self, added: I) -> String
    where
        I: IntoIterator<Item = &'a Instruction>,
    {
        let mut output = String::new();
        writeln!(output, "{}\n", self.colorize("Success", ansi::GREEN)).ok();
        for instruction in added {
            Self::write_instruction(&mut output, instruction);
        }
        output
    }

    fn write_instruction(output: &mut String, instruction: &Instruction) {
        writeln!(output, " Re: {}", instruction.source()).ok();
        let direction = instruction.direction.label();
        match &instruction.scope {
            Scope::Explicit(files) => {
                let files: Vec<&str> = files.iter().map(String::as_str).collect();
                writeln!(output, "   Files ({direction}):\t{}", files.join(" ")).ok();
            }
            Scope::AllFiles => {
                writeln!(output, "   Every imported file ({direction}).").ok();
            }
        }
    }

    #[must_use]
    pub fn format_reports(&self, store: &ReportStore) -> String {
        let mut output = String::new();
        if store.is_empty() {
            writeln!(output, "  =[ No reports imported ]=").ok();
            return output;
        }

        writeln!(output, "  =[ Imported reports: ]=").ok();
        for participant in store.participants() {
            writeln!(
                output,
                "Participant: {}, files:",
                self.colorize(&participant.id, ansi::CYAN)
            )
            .ok();
            let names: Vec<&str> = participant.files.iter().map(|f| f.name.as_str()).collect();
            writeln!(output, "\t{}", names.join("\t")).ok();
        }
        output
    }

    #[must_use]
    pub fn format_instructions(&self, set: &InstructionSet) -> String {
        let mut output = String::new();
        if set.is_empty() {
            writeln!(output, " =[ No instructions imported ]=").ok();
            return output;
        }

        writeln!(output, " =[ Imported instructions: ]=").ok();
        for instruction in set.list() {
            Self::write_instruction(&mut output, instruction);
        }
        output
    }

    /// Full transcript of a `start` invocation: notices, step banners, listings, verdicts.
    #[must_use]
    pub fn format_check(&self, outcome: &CheckOutcome) -> String {
        let mut output = String::new();
        for notice in &outcome.notices {
            self.write_notice(&mut output, *notice);
        }

        let banner = format!(
            "  ==[ CHECK STARTS:  Going through {} steps ]==",
            outcome.steps
        );
        writeln!(output, "{}", self.colorize(&banner, ansi::BOLD)).ok();

        if outcome.steps >= 1 {
            writeln!(output, "  =[ SYNTAX CHECK ]=").ok();
            for entry in &outcome.structure {
                writeln!(output, "Participant: '{}', files:", entry.participant).ok();
                for path in &entry.files {
                    writeln!(output, "\t {}", path.display()).ok();
                }
            }
        }

        if let Some(log) = &outcome.match_log {
            self.write_semantic(&mut output, log);
        }

        writeln!(output, "{}", self.colorize("  ==[ CHECK ENDED ]==", ansi::BOLD)).ok();
        output
    }

    fn write_notice(&self, output: &mut String, notice: Notice) {
        match notice {
            Notice::NoInstructions => {
                writeln!(
                    output,
                    "{}",
                    self.colorize(
                        "No instructions imported! => Second step is skipped",
                        ansi::YELLOW
                    )
                )
                .ok();
                writeln!(output, "Use 'addins INSTRUCTION_FILE'").ok();
                writeln!(output, "Or  'addreg REGEX in|out FILE1 FILE2...'").ok();
            }
            Notice::NoReports => {
                writeln!(
                    output,
                    "{}",
                    self.colorize("No reports imported! => Nothing to check", ansi::YELLOW)
                )
                .ok();
                writeln!(output, "Use 'addrep REPORTS_DIR'").ok();
            }
        }
    }

    fn write_semantic(&self, output: &mut String, log: &MatchLog) {
        writeln!(output, "  =[ SEMANTIC CHECK ]=").ok();
        for participant in &log.participants {
            writeln!(output, "Checking participant '{}':\n", participant.participant).ok();
            for file in &participant.files {
                self.write_file_matches(output, file);
                writeln!(output).ok();
            }
        }
    }

    fn write_file_matches(&self, output: &mut String, file: &FileMatches) {
        writeln!(output, "  Checking file {}:", file.file).ok();
        for record in &file.records {
            Self::write_record(output, record);
            let verdict = usize::from(record.matched());
            let ratio = self.colorize(&format!("{verdict} / 1"), Self::ratio_color(verdict, 1));
            writeln!(output, "  {ratio} REGEXs matched in file {}\n", file.file).ok();
        }
    }

    fn write_record(output: &mut String, record: &MatchRecord) {
        writeln!(
            output,
            "    RE {}: '{}' ({}).",
            record.local_index,
            record.pattern,
            record.direction.label()
        )
        .ok();
        if record.hits.is_empty() {
            // Prints the hit count (always 0 here), not the number of lines scanned.
            writeln!(output, "      No matches in {} lines!", record.hits.len()).ok();
            return;
        }
        for (ordinal, hit) in record.hits.iter().enumerate() {
            writeln!(output, "      Match {} in line {}:", ordinal + 1, hit.line_index).ok();
            writeln!(output, "        {}", hit.text).ok();
        }
    }

    #[must_use]
    pub fn format_summary(&self, summary: &Summary) -> String {
        let mut output = String::new();
        let Summary::Results(participants) = summary else {
            writeln!(output, " =[ Nothing to conclude: run 'start 2' first ]=").ok();
            return output;
        };

        writeln!(output, "{}", self.colorize("==[ RESULTS ]==", ansi::BOLD)).ok();
        for participant in participants {
            writeln!(output, "Participant '{}' results:\n", participant.participant).ok();
            for file in &participant.files {
                self.write_file_result(&mut output, file);
            }
            writeln!(output).ok();
        }
        output
    }

    fn write_file_result(&self, output: &mut String, file: &FileResult) {
        let ratio = self.colorize(
            &format!("{} / {}", file.matched, file.applicable),
            Self::ratio_color(file.matched, file.applicable),
        );
        writeln!(output, "  {}:\t{ratio}", file.file).ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
