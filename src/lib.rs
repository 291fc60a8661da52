pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod instruction;
pub mod output;
pub mod report;
pub mod session;
pub mod shell;
pub mod summary;

#[cfg(test)]
mod test_fixtures;

pub use error::{Result, VerdictError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RULES_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
