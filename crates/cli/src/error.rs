//! Errors surfaced by the `swatch` binary and the exit code each one maps to.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | bad command line (reported by clap itself) |
//! | 10   | a color could not be matched in `--strict` mode, or the table is empty |
//! | 11   | the `--table-file` could not be read |
//! | 12   | unknown `--table` name or invalid table contents |
//! | 13   | JSON output could not be produced |
//!
//! Library errors are routed by `From<ColorError>`: table problems are user
//! input, read failures are I/O, everything else is a color error.

use std::fmt;
use swatch_core::ColorError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A color-level error (bad input color, empty table, numeric fault).
    Color(ColorError),
    /// An I/O error (table file could not be read).
    Io(String),
    /// A user input error (unknown table name, malformed table JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Io(msg) => CliError::Io(msg),
            ColorError::InvalidTable(_) | ColorError::UnknownTable(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Color(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
