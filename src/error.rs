//! Error taxonomy for the syscall table pipeline
//!
//! Four user-facing kinds, matching what can actually go wrong:
//! missing header, read failure, write failure, formatter failure.
//! Malformed individual header lines are never errors (see parser).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the parse/serialize/emit pipeline
#[derive(Error, Debug)]
pub enum GenError {
    #[error("header file not found: {0}")]
    NotFound(PathBuf),

    #[error("file processing failed for {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file write error for {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rustfmt formatting failed for {0}")]
    FormatFailure(PathBuf),
}

pub type Result<T> = std::result::Result<T, GenError>;
