//! # Records, Record Sets, and Reports
//!
//! The tabular layer: one row is a [`Record`] (a fixed-arity tuple of text
//! fields), a table is a [`RecordSet`] (rows sharing a field count, an
//! optional header row, and per-column width tracking), and a [`Report`]
//! wraps a rendered table with a title and creation timestamp.
//!
//! ## Rendering Pipeline
//!
//! ```text
//! delimited file ----> RecordSet ----> text table ----> Report
//!        |                 |
//!        |                 +--------> INSERT INTO ... VALUES (...)
//!        +--> Record::tokenize
//! ```
//!
//! Column widths are running maxima over every row added, header included,
//! so a table renders with each column exactly wide enough for its longest
//! value. The same record cursor that walks rows for display also drives
//! SQL-insert generation, one statement per row.
//!
//! ## Module Structure
//!
//! - `types`: [`FieldType`] column tags controlling SQL quoting
//! - `record`: [`Record`] rows and tokenization
//! - `record_set`: [`RecordSet`] tables, width tracking, rendering, inserts
//! - `report`: [`Report`] titled output blocks

mod record;
mod record_set;
mod report;
mod types;

pub use record::Record;
pub use record_set::RecordSet;
pub use report::Report;
pub use types::FieldType;
