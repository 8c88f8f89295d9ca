//! Error types for the variables file and dataset construction.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a variables file.
#[derive(Debug, Error)]
pub enum VarsError {
    #[error("line {line}: missing `=` in assignment")]
    MissingAssign { line: usize },
    #[error("line {line}: invalid variable name `{name}`")]
    BadName { line: usize, name: String },
    #[error("line {line}: {reason}")]
    BadValue { line: usize, reason: String },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised when assembling a `Dataset` from parsed variables.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("`{key}` must be a list of numbers")]
    NotAList { key: String },
    #[error("`{key}` has {got} values but the pipes axis has {expected}")]
    ShapeMismatch {
        key: String,
        got: usize,
        expected: usize,
    },
    #[error("expected {expected} result rows, got {got}")]
    WrongRowCount { got: usize, expected: usize },
    #[error("`pipes` entries must be positive integers, got {0}")]
    BadPipe(f64),
    #[error("pipes axis must not be empty")]
    EmptyPipes,
}
