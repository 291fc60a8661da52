use std::path::PathBuf;

use crate::checker::CheckStep;
use crate::error::{Result, VerdictError};

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reset,
    AddReports(PathBuf),
    AddInstructions(PathBuf),
    AddRegex {
        pattern: String,
        direction: String,
        files: Vec<String>,
    },
    ImportedReports,
    ImportedInstructions,
    /// `None` means the configured default step.
    Start(Option<CheckStep>),
    Conclude,
    Help(Option<String>),
    Exit,
}

pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub text: &'static str,
}

pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "reset",
        usage: "reset",
        text: "Forget all imported reports, instructions and check results.",
    },
    CommandHelp {
        name: "addrep",
        usage: "addrep REPORTS_DIR",
        text: "Import reports. Every subdirectory of REPORTS_DIR is one participant,\n\
               every file inside it is one transcript.",
    },
    CommandHelp {
        name: "addins",
        usage: "addins INSTRUCTION_FILE",
        text: "Import instructions from a JSON object of\n\
               {\"REGEX\": {\"direction\": \"in\"|\"out\", \"files\": [FILE, ...]}}.\n\
               Without \"files\" the instruction applies to every imported file.",
    },
    CommandHelp {
        name: "addreg",
        usage: "addreg REGEX in|out [FILE ...]",
        text: "Add one instruction. Without files it applies to every imported file.",
    },
    CommandHelp {
        name: "importedreports",
        usage: "importedreports",
        text: "List imported participants and their files.",
    },
    CommandHelp {
        name: "importedinstructions",
        usage: "importedinstructions",
        text: "List imported instructions in the order they are checked.",
    },
    CommandHelp {
        name: "start",
        usage: "start ['1'/'2']",
        text: "Start the checking process. Checking steps:\n\n\
               1. Parsing & Syntax check;\n\
               2. Parsing & Syntax check & Semantic check.\n\n\
               No files in collection:              # # steps done\n\
               Files present in collection:         1 # steps done\n\
               Instructions present in collection:  1 2 steps done\n\n\
               Results are saved and can be shown with 'conclude'.",
    },
    CommandHelp {
        name: "conclude",
        usage: "conclude",
        text: "Show matched / applicable instruction counts per participant file\n\
               from the last semantic check.",
    },
    CommandHelp {
        name: "help",
        usage: "help [COMMAND]",
        text: "List commands, or describe one.",
    },
    CommandHelp {
        name: "exit",
        usage: "exit",
        text: "Leave the session. End of input does the same.",
    },
];

#[must_use]
pub fn find_help(name: &str) -> Option<&'static CommandHelp> {
    COMMANDS.iter().find(|c| c.name == name)
}

fn usage_of(name: &str) -> &'static str {
    find_help(name).map_or("", |help| help.usage)
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// # Errors
    /// Returns `UnknownCommand`, `MissingArgument` or `InvalidStep`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(n, r)| (n, r.trim()));

        let command = match name {
            "reset" => Self::Reset,
            "addrep" => Self::AddReports(required_path("addrep", rest)?),
            "addins" => Self::AddInstructions(required_path("addins", rest)?),
            "addreg" => parse_addreg(rest)?,
            "importedreports" => Self::ImportedReports,
            "importedinstructions" => Self::ImportedInstructions,
            "start" if rest.is_empty() => Self::Start(None),
            "start" => Self::Start(Some(rest.parse()?)),
            "conclude" => Self::Conclude,
            "help" | "?" => Self::Help((!rest.is_empty()).then(|| rest.to_string())),
            "exit" | "quit" | "EOF" => Self::Exit,
            other => return Err(VerdictError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required_path(command: &'static str, rest: &str) -> Result<PathBuf> {
    if rest.is_empty() {
        return Err(VerdictError::MissingArgument {
            command,
            usage: usage_of(command),
        });
    }
    Ok(PathBuf::from(rest))
}

fn parse_addreg(rest: &str) -> Result<Command> {
    let mut parts = rest.split_whitespace();
    let (Some(pattern), Some(direction)) = (parts.next(), parts.next()) else {
        return Err(VerdictError::MissingArgument {
            command: "addreg",
            usage: usage_of("addreg"),
        });
    };
    Ok(Command::AddRegex {
        pattern: pattern.to_string(),
        direction: direction.to_string(),
        files: parts.map(str::to_string).collect(),
    })
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
