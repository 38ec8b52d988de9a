// File: crates/idle-data/src/error.rs
// Summary: Errors raised while reading idle logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line is not a level announcement")]
    NoMatch,

    #[error("invalid {field} in line {line:?}")]
    InvalidField { field: &'static str, line: String },

    #[error("failed to read idle log: {0}")]
    Io(#[from] std::io::Error),
}
