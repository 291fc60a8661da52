use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerdictError {
    /// Report import root is missing or not a directory.
    #[error("No such file or directory")]
    DirectoryNotFound,

    #[error("{}: '{}'", errno_detail(.source), .path.display())]
    InstructionFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid instruction file {path}: {source}")]
    InstructionParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid regular expression '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid direction '{0}', expected 'in' or 'out'")]
    InvalidDirection(String),

    #[error("Invalid check step '{0}', expected 1 or 2")]
    InvalidStep(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for '{command}'. Usage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Renders an I/O error as `[Errno N] message`, falling back to the plain message when
/// the error carries no OS code.
fn errno_detail(err: &std::io::Error) -> String {
    let message = strip_os_error_suffix(&err.to_string());
    err.raw_os_error()
        .map_or_else(|| message.clone(), |code| format!("[Errno {code}] {message}"))
}

/// `io::Error` display appends ` (os error N)`; the errno prefix already carries it.
fn strip_os_error_suffix(message: &str) -> String {
    message
        .rfind(" (os error ")
        .map_or_else(|| message.to_string(), |idx| message[..idx].to_string())
}

impl VerdictError {
    /// Short category name used as the error headline.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::DirectoryNotFound => "DirectoryNotFound",
            Self::InstructionFileNotFound { .. } => "InstructionFileNotFound",
            Self::InstructionParse { .. } => "InstructionParse",
            Self::Pattern { .. } => "PatternError",
            Self::InvalidDirection(_) => "InvalidDirection",
            Self::InvalidStep(_) => "InvalidStep",
            Self::UnknownCommand(_) => "UnknownCommand",
            Self::MissingArgument { .. } => "MissingArgument",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::Config(_) => "Config",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Actionable hint printed under the error, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InstructionParse { .. } => Some(
                "expected {\"<regex>\": {\"direction\": \"in\"|\"out\", \"files\": [...]}}",
            ),
            Self::UnknownCommand(_) => Some("type 'help' to list available commands"),
            Self::InvalidStep(_) => Some("use 'start 1' or 'start 2'"),
            Self::DirectoryNotFound
            | Self::InstructionFileNotFound { .. }
            | Self::Pattern { .. }
            | Self::InvalidDirection(_)
            | Self::MissingArgument { .. }
            | Self::FileRead { .. }
            | Self::Io(_)
            | Self::Config(_)
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerdictError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
