mod engine;
mod result;

pub use engine::CheckEngine;
pub use result::{
    CheckOutcome, FileMatches, Hit, MatchLog, MatchRecord, Notice, ParticipantMatches,
    StructureEntry,
};

use std::str::FromStr;

use crate::error::VerdictError;

/// How deep a `start` goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStep {
    /// Structural listing of imported reports.
    Syntax,
    /// Structural listing plus rule evaluation.
    Semantic,
}

impl CheckStep {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Syntax => 1,
            Self::Semantic => 2,
        }
    }

    /// # Errors
    /// Returns `InvalidStep` for anything other than 1 or 2.
    pub fn from_number(n: u8) -> Result<Self, VerdictError> {
        match n {
            1 => Ok(Self::Syntax),
            2 => Ok(Self::Semantic),
            other => Err(VerdictError::InvalidStep(other.to_string())),
        }
    }
}

impl FromStr for CheckStep {
    type Err = VerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| VerdictError::InvalidStep(s.to_string()))
            .and_then(Self::from_number)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
