//! # File Readers
//!
//! Line-oriented readers for the two text formats the loader consumes:
//! configuration files (`key = value` pairs) and delimited sample data.
//! Both skip blank lines and lines whose first non-whitespace byte is `#`,
//! and both cap physical lines at MAX_LINE_LEN bytes.
//!
//! Readers keep the three file outcomes distinct for callers: a file that
//! cannot be opened, content that is malformed (with the offending line
//! number), and success.

mod config_file;
mod delim_file;

pub use config_file::{read_config, read_config_file};
pub use delim_file::{read_delim, read_delim_file};

/// Longest physical line either reader accepts, in bytes.
pub(crate) const MAX_LINE_LEN: usize = 1024;
