//! Colored error output for the command boundary.
//!
//! Format: `✖ ErrorType: message` followed by an optional `help:` line.

use std::io::{IsTerminal, Write};

use crate::error::VerdictError;

use super::{ColorMode, ansi, is_no_color_set};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        !is_no_color_set() && std::io::stderr().is_terminal()
    }

    pub fn print_error(&self, error_type: &str, message: &str, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, suggestion);
    }

    pub fn print_verdict_error(&self, err: &VerdictError) {
        self.print_error(err.error_type(), &err.to_string(), err.suggestion());
    }

    /// Writes an error to any writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        suggestion: Option<&str>,
    ) {
        // Nothing sensible to do if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    pub fn write_verdict_error<W: Write>(&self, w: &mut W, err: &VerdictError) {
        self.write_error(w, err.error_type(), &err.to_string(), err.suggestion());
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
