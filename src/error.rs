//! # Error Types
//!
//! Typed errors for the library surface. File readers keep the three
//! outcomes a caller must tell apart (success, "could not be opened",
//! and "content malformed") as distinct variants rather than collapsing
//! them into one I/O error.
//!
//! ## Error Categories
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `FileOpen` | the file itself could not be opened |
//! | `Malformed` | the file opened but its content violates the format |
//! | `Io` | a read failed after the file was opened |
//! | `FieldCount` | a record's arity does not match its record set |
//! | `MissingHeaders` | insert-query generation needs a header row |
//! | `MissingKey` | a required configuration key is absent |
//!
//! The first failure aborts the operation that hit it; there is no retry
//! at this layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened at all.
    #[error("could not open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file opened but its content does not follow the expected format.
    #[error("malformed content at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// A record's arity does not match the record set it was offered to.
    #[error("field count mismatch: expected {expected}, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Insert-query generation requires a header row naming the columns.
    #[error("record set has no header row")]
    MissingHeaders,

    /// A required configuration key is not present.
    #[error("missing required configuration key `{key}`")]
    MissingKey { key: String },

    /// A read failed after the file was successfully opened.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// True for the "content malformed" outcome of a file read.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed { .. })
    }

    /// True for the "file could not be opened" outcome of a file read.
    pub fn is_file_open(&self) -> bool {
        matches!(self, Error::FileOpen { .. })
    }
}
