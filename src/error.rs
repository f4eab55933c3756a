//! Crate-level error types.
//!
//! Only the configuration surface is fallible. Interaction calls never
//! return errors; they skip degenerate input silently.

use std::fmt;

/// Errors produced by the camnav crate.
#[derive(Debug)]
pub enum NavError {
    /// Generic I/O failure while reading or writing options.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
