use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "lab-verdict")]
#[command(author, version, about = "Verify lab terminal transcripts against regex instructions")]
#[command(long_about = "Imports per-participant terminal transcripts and checks them against \
    ordered regular-expression instructions.\n\n\
    Exit codes (check):\n  \
    0 - Every applicable instruction matched, or only step 1 ran\n  \
    1 - At least one instruction did not match\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive verification session (default)
    Shell(ShellArgs),

    /// Import, check and conclude in one run
    Check(CheckArgs),
}

#[derive(Parser, Debug, Default)]
pub struct ShellArgs {
    /// Read commands from FILE instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Report directories (one subdirectory per participant)
    #[arg(short, long, required = true, num_args = 1..)]
    pub reports: Vec<PathBuf>,

    /// Instruction JSON files
    #[arg(short, long, num_args = 1..)]
    pub instructions: Vec<PathBuf>,

    /// Extra instruction as REGEX:DIRECTION[:FILE,FILE...]
    #[arg(long)]
    pub rule: Vec<RuleArg>,

    /// Checking step (defaults to the configured step)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub step: Option<u8>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// An instruction given on the command line.
///
/// The pattern may itself contain `:`, so the direction is located from the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleArg {
    pub pattern: String,
    pub direction: String,
    pub files: Vec<String>,
}

impl FromStr for RuleArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid rule '{s}', expected REGEX:in|out[:FILE,FILE...]");

        let (head, last) = s.rsplit_once(':').ok_or_else(invalid)?;
        let (pattern, direction, files) = if is_direction(last) {
            (head, last, "")
        } else {
            let (pattern, direction) = head.rsplit_once(':').ok_or_else(invalid)?;
            if !is_direction(direction) {
                return Err(invalid());
            }
            (pattern, direction, last)
        };
        if pattern.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            pattern: pattern.to_string(),
            direction: direction.to_string(),
            files: files
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

fn is_direction(s: &str) -> bool {
    matches!(s, "in" | "out")
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
