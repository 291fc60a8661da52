//! Text-command front end over [`Session`].
//!
//! Every command is translated into one session call and one rendered message. Errors
//! stop at this boundary: they are printed and the next line is read.

mod command;

pub use command::{COMMANDS, Command, CommandHelp, find_help};

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::checker::CheckStep;
use crate::config::{Config, PreloadConfig};
use crate::error::{Result, VerdictError};
use crate::output::{ColorMode, EXIT_MESSAGE, ErrorOutput, RESET_MESSAGE, TextFormatter};
use crate::session::Session;

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    session: Session,
    formatter: TextFormatter,
    errors: ErrorOutput,
    default_step: CheckStep,
    prompt: String,
}

impl Shell {
    /// # Errors
    /// Returns `InvalidStep` if the configured default step is out of range.
    pub fn new(config: &Config, color: ColorMode) -> Result<Self> {
        Ok(Self {
            session: Session::new(),
            formatter: TextFormatter::new(color),
            errors: ErrorOutput::new(color),
            default_step: CheckStep::from_number(config.check.default_step)?,
            prompt: config.session.prompt.clone(),
        })
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run one command against the session and render its message.
    ///
    /// # Errors
    /// Propagates import errors; the session is left as it was before the call.
    pub fn execute(&mut self, command: Command) -> Result<(String, Flow)> {
        debug!(?command, "executing");
        let message = match command {
            Command::Reset => {
                self.session.reset();
                format!("{RESET_MESSAGE}\n")
            }
            Command::AddReports(dir) => {
                let added = self.session.add_reports(&dir)?;
                self.formatter.format_added_reports(added)
            }
            Command::AddInstructions(path) => {
                let added = self.session.add_instructions(&path)?;
                self.formatter.format_added_instructions(added)
            }
            Command::AddRegex {
                pattern,
                direction,
                files,
            } => {
                let added = self.session.add_regex(&pattern, &direction, &files)?;
                self.formatter.format_added_instructions([added])
            }
            Command::ImportedReports => self.formatter.format_reports(self.session.reports()),
            Command::ImportedInstructions => {
                self.formatter.format_instructions(self.session.instructions())
            }
            Command::Start(step) => {
                let outcome = self.session.start(step.unwrap_or(self.default_step));
                self.formatter.format_check(&outcome)
            }
            Command::Conclude => self.formatter.format_summary(&self.session.conclude()),
            Command::Help(topic) => help_text(topic.as_deref())?,
            Command::Exit => return Ok((format!("{EXIT_MESSAGE}\n"), Flow::Exit)),
        };
        Ok((message, Flow::Continue))
    }

    /// Parse and execute one line, printing the message or the error.
    pub fn handle_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> Flow {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok((String::new(), Flow::Continue)),
        });

        match result {
            Ok((message, flow)) => {
                out.write_all(message.as_bytes()).ok();
                flow
            }
            Err(e) => {
                self.errors.write_verdict_error(err, &e);
                Flow::Continue
            }
        }
    }

    /// Import the configured reports and instruction files, reporting failures.
    pub fn preload<W: Write, E: Write>(
        &mut self,
        preload: &PreloadConfig,
        out: &mut W,
        err: &mut E,
    ) {
        let commands = preload
            .reports
            .iter()
            .map(|dir| Command::AddReports(Path::new(dir).to_path_buf()))
            .chain(
                preload
                    .instructions
                    .iter()
                    .map(|file| Command::AddInstructions(Path::new(file).to_path_buf())),
            );

        for command in commands {
            match self.execute(command) {
                Ok((message, _)) => {
                    out.write_all(message.as_bytes()).ok();
                }
                Err(e) => self.errors.write_verdict_error(err, &e),
            }
        }
    }

    /// Read commands until `exit` or end of input.
    ///
    /// Input lines that are not valid UTF-8 are decoded lossily, like transcripts.
    ///
    /// # Errors
    /// Returns an error if reading input or flushing output fails.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
        show_prompt: bool,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            if show_prompt {
                write!(out, "{}", self.prompt)?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out, "{EXIT_MESSAGE}")?;
                break;
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            if self.handle_line(&line, out, err) == Flow::Exit {
                break;
            }
        }
        out.flush()
    }
}

fn help_text(topic: Option<&str>) -> Result<String> {
    let mut output = String::new();
    match topic {
        None => {
            writeln!(output, "Documented commands (type help <topic>):").ok();
            for command in COMMANDS {
                writeln!(output, "  {:<22}{}", command.name, command.usage).ok();
            }
        }
        Some(name) => {
            let help =
                find_help(name).ok_or_else(|| VerdictError::UnknownCommand(name.to_string()))?;
            writeln!(output, "{}\n\n        Usage: {}\n", first_line(help.text), help.usage).ok();
            for line in help.text.lines().skip(1) {
                if line.is_empty() {
                    writeln!(output).ok();
                } else {
                    writeln!(output, "        {line}").ok();
                }
            }
        }
    }
    Ok(output)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
