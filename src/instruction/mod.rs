//! Ordered verification instructions.
//!
//! Instruction order is load-bearing: the per-file local index printed by the checker and
//! used for result bookkeeping is the position within the ordered subsequence of
//! instructions that apply to that file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, VerdictError};

/// Which side of the terminal session a pattern describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "in")]
    Input,
    #[serde(rename = "out")]
    Output,
}

impl Direction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl FromStr for Direction {
    type Err = VerdictError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in" => Ok(Self::Input),
            "out" => Ok(Self::Output),
            other => Err(VerdictError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Files an instruction is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Explicit(IndexSet<String>),
    AllFiles,
}

impl Scope {
    /// Empty file lists mean every imported file.
    #[must_use]
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: IndexSet<String> = files.into_iter().map(Into::into).collect();
        if names.is_empty() {
            Self::AllFiles
        } else {
            Self::Explicit(names)
        }
    }

    #[must_use]
    pub fn includes(&self, file_name: &str) -> bool {
        match self {
            Self::Explicit(names) => names.contains(file_name),
            Self::AllFiles => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Instruction {
    pub pattern: Regex,
    pub direction: Direction,
    pub scope: Scope,
}

impl Instruction {
    /// Compile `pattern` into an instruction.
    ///
    /// # Errors
    /// Returns `Pattern` if the regular expression is malformed.
    pub fn compile(pattern: &str, direction: Direction, scope: Scope) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| VerdictError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern,
            direction,
            scope,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn applies_to(&self, file_name: &str) -> bool {
        self.scope.includes(file_name)
    }
}

/// One value of the instruction file object, keyed by its pattern.
#[derive(Debug, Deserialize)]
struct InstructionEntry {
    direction: Direction,
    #[serde(default)]
    files: Option<Vec<String>>,
}

#[derive(Debug, Default)]
pub struct InstructionSet {
    instructions: Vec<Instruction>,
}

impl InstructionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Append every instruction declared in the JSON file at `path`, in declaration order.
    ///
    /// The whole file is compiled before anything is appended.
    ///
    /// # Errors
    /// Returns `InstructionFileNotFound` if the file cannot be opened, `InstructionParse`
    /// if it is not a valid instruction object, and `Pattern` for a malformed regex.
    pub fn import_from_json(&mut self, path: &Path) -> Result<&[Instruction]> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            VerdictError::InstructionFileNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let entries: IndexMap<String, InstructionEntry> = serde_json::from_str(&content)
            .map_err(|source| VerdictError::InstructionParse {
                path: path.to_path_buf(),
                source,
            })?;

        let compiled = entries
            .into_iter()
            .map(|(pattern, entry)| {
                let scope = Scope::from_files(entry.files.unwrap_or_default());
                Instruction::compile(&pattern, entry.direction, scope)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            file = %path.display(),
            instructions = compiled.len(),
            "imported instructions"
        );
        Ok(self.append(compiled))
    }

    /// Append a single instruction given on the command line.
    ///
    /// # Errors
    /// Returns `InvalidDirection` for a token other than `in`/`out`, and `Pattern` for a
    /// malformed regex.
    pub fn add_manual<S: AsRef<str>>(
        &mut self,
        pattern: &str,
        direction: &str,
        files: &[S],
    ) -> Result<&Instruction> {
        let direction = direction.parse::<Direction>()?;
        let scope = Scope::from_files(files.iter().map(|f| f.as_ref().to_string()));
        let instruction = Instruction::compile(pattern, direction, scope)?;
        debug!(pattern, %direction, "added instruction");
        self.instructions.push(instruction);
        Ok(&self.instructions[self.instructions.len() - 1])
    }

    fn append(&mut self, compiled: Vec<Instruction>) -> &[Instruction] {
        let start = self.instructions.len();
        self.instructions.extend(compiled);
        &self.instructions[start..]
    }

    /// All instructions in stored order.
    #[must_use]
    pub fn list(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instructions whose scope includes `file_name`, in stored order.
    ///
    /// The position in the returned iterator is the file-local index.
    pub fn applicable_to<'a>(
        &'a self,
        file_name: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Instruction)> + 'a {
        self.instructions
            .iter()
            .enumerate()
            .filter(move |(_, instruction)| instruction.applies_to(file_name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn clear(&mut self) {
        self.instructions.clear();
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
