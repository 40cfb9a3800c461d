//! Error types for hmscalc
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hmscalc operations
pub type HmsResult<T> = Result<T, HmsError>;

/// Main error type for hmscalc operations
#[derive(Error, Debug)]
pub enum HmsError {
    /// Time input was not text
    #[error("time input must be a string, got: {type_name}")]
    NotTimeString { type_name: String },

    /// Time input was text but did not match `[-]H:MM[:SS]`
    #[error("invalid time format: '{input}'")]
    InvalidTimeFormat { input: String },

    /// Summation was handed something that is not a sequence
    #[error("cannot sum a non-sequence value of type {type_name}")]
    NotIterable { type_name: String },

    /// Summation found an element that is not a time
    #[error("element {index} is not a time, got: {type_name}")]
    NotHmsTime { index: usize, type_name: String },

    /// Checked arithmetic left the `i64` second range
    #[error("time arithmetic overflowed: {expression}")]
    Overflow { expression: String },

    /// IO error while reading a config file
    #[error("IO error: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Config file is not valid TOML for [`crate::config::Config`]
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl HmsError {
    /// Whether this error belongs to the time-error family.
    ///
    /// Only parse failures count; type errors from summation, overflow and
    /// config errors do not.
    pub fn is_time_error(&self) -> bool {
        matches!(
            self,
            HmsError::NotTimeString { .. } | HmsError::InvalidTimeFormat { .. }
        )
    }

    pub(crate) fn invalid_format(input: &str) -> Self {
        HmsError::InvalidTimeFormat {
            input: input.to_string(),
        }
    }
}
