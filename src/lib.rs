//! # gledger - General Ledger Data Layer
//!
//! gledger is the in-memory data layer of a small accounting system: owned
//! text buffers, a string-keyed hash map, cursor-iterable collections, and
//! record sets that render ASCII report tables or generate SQL `INSERT`
//! statements. File readers build maps and record sets from configuration
//! and delimited sample-data files; the database itself stays behind the
//! [`DbConnection`] trait, supplied by an external driver.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gledger::{load_delim_file, Config};
//!
//! let config = Config::load("conf/gledger.conf")?;
//! let params = config.connect_params()?;
//!
//! let mut db = MyDriver::connect(&params)?;
//! let loaded = load_delim_file(&mut db, "users", "sample_data/users", b':')?;
//! println!("loaded {loaded} rows");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Programs (check / render / sql)      │
//! ├──────────────────────────────────────┤
//! │ Database Glue (db)                   │
//! ├──────────────────────────────────────┤
//! │ File Readers (files)                 │
//! ├──────────────────────────────────────┤
//! │ Records / Reports (records)          │
//! ├──────────────────────────────────────┤
//! │ Map / Collections                    │
//! ├──────────────────────────────────────┤
//! │ Text (TextBuf, djb2)                 │
//! └──────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous: each operation runs to
//! completion on the caller's thread, and ownership flows downward. A
//! record set owns its records, a record owns its field buffers, and
//! dropping the root releases the lot.
//!
//! ## Module Overview
//!
//! - [`text`]: Owned byte buffers with explicit length and capacity
//! - [`map`]: String-keyed hash map with separate chaining
//! - [`collections`]: Cursor-iterable list and fixed-slot vector
//! - [`records`]: Rows, record sets, table rendering, insert queries
//! - [`files`]: Configuration and delimited-file readers
//! - [`config`]: Configuration lookup and connection parameters
//! - [`db`]: Database collaborator trait and loading glue

#[macro_use]
mod macros;

pub mod collections;
pub mod config;
pub mod db;
pub mod error;
pub mod files;
pub mod map;
pub mod records;
pub mod text;

pub use config::{Config, ConnectParams};
pub use db::{load_delim_file, load_sample_data, report_from_query, DbConnection};
pub use error::{Error, Result};
pub use files::{read_config, read_config_file, read_delim, read_delim_file};
pub use map::StrMap;
pub use records::{FieldType, Record, RecordSet, Report};
pub use text::TextBuf;
