use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

const DEFAULT_PROMPT: &str = "(lab-verdict) ";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub preload: PreloadConfig,
}

/// Interactive shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prompt printed before each command when stdin is a terminal.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Step used by `start` when no argument is given (1 or 2).
    #[serde(default = "default_step")]
    pub default_step: u8,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            default_step: default_step(),
        }
    }
}

/// Imports performed when a session starts, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreloadConfig {
    #[serde(default)]
    pub reports: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

const fn default_step() -> u8 {
    2
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
