//! # Record Sets
//!
//! A [`RecordSet`] owns rows sharing one field count, an optional header
//! row, per-column [`FieldType`]s, and per-column width maxima. It renders
//! itself as an aligned ASCII table and generates one `INSERT` statement per
//! row through its cursor.
//!
//! ## Table Format
//!
//! ```text
//! +----+-------+
//! | ID | Name  |
//! +----+-------+
//! | 1  | Bob   |
//! | 22 | Alice |
//! +----+-------+
//! ```
//!
//! Each column is as wide as its longest value, header included. Separator
//! segments are `width + 2` dashes; value cells are `"| "`, the
//! left-justified value, and a closing space.
//!
//! ## Width Tracking
//!
//! Widths are running maxima updated on `set_headers` and every
//! `add_record`, never recomputed. The rendered width of a field is its
//! byte length; an unset field counts as zero.
//!
//! ## Cursor States
//!
//! The data cursor (headers excluded) moves through `not-started`,
//! `iterating`, and `exhausted`. `seek_start` enters `not-started` at row 0;
//! each `next_record` / `next_insert_query` advances one row; past the last
//! row the cursor is exhausted and every further call returns `None` until
//! the next seek. A freshly built set is unpositioned: seek first.

use smallvec::{smallvec, SmallVec};

use crate::collections::CursorList;
use crate::error::{Error, Result};
use crate::records::{FieldType, Record};
use crate::text::TextBuf;

#[derive(Debug)]
pub struct RecordSet {
    field_count: usize,
    headers: Option<Record>,
    types: SmallVec<[FieldType; 8]>,
    widths: SmallVec<[usize; 8]>,
    records: CursorList<Record>,
}

impl RecordSet {
    /// Empty set for rows of `field_count` columns.
    ///
    /// Panics when `field_count` is zero; a zero-column schema is a
    /// programming error.
    pub fn new(field_count: usize) -> RecordSet {
        assert!(field_count > 0, "record set needs at least one field");
        RecordSet {
            field_count,
            headers: None,
            types: smallvec![FieldType::String; field_count],
            widths: smallvec![0; field_count],
            records: CursorList::new(),
        }
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Number of data records; the header row does not count.
    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    pub fn headers(&self) -> Option<&Record> {
        self.headers.as_ref()
    }

    /// Tags column `index` with a type, controlling SQL quoting.
    ///
    /// Panics when `index` is outside the schema.
    pub fn set_type(&mut self, index: usize, field_type: FieldType) {
        self.types[index] = field_type;
    }

    /// Stores the header row; its fields participate in width tracking.
    pub fn set_headers(&mut self, record: Record) -> Result<()> {
        self.check_arity(&record)?;
        self.update_widths(&record);
        self.headers = Some(record);
        Ok(())
    }

    /// Appends a data row, taking ownership, and folds its field lengths
    /// into the column widths.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        self.check_arity(&record)?;
        self.update_widths(&record);
        self.records.append(record);
        Ok(())
    }

    /// Positions the data cursor before the first row.
    pub fn seek_start(&mut self) {
        self.records.seek_start();
    }

    /// Next data row under the cursor, advancing it. `None` once exhausted,
    /// idempotently.
    pub fn next_record(&mut self) -> Option<&Record> {
        self.records.next()
    }

    /// Builds the insert statement for the row under the cursor and
    /// advances, `Ok(None)` once the cursor is exhausted:
    ///
    /// ```text
    /// INSERT INTO <table> (<headers comma-joined>) VALUES (<typed values>)
    /// ```
    ///
    /// Requires headers; errors with [`Error::MissingHeaders`] otherwise.
    pub fn next_insert_query(&mut self, table: &str) -> Result<Option<TextBuf>> {
        let headers = match &self.headers {
            Some(headers) => headers,
            None => return Err(Error::MissingHeaders),
        };
        let record = match self.records.next() {
            Some(record) => record,
            None => return Ok(None),
        };
        let columns = headers.to_delim_string(b',');
        let values = record.to_values_string_typed(&self.types);
        Ok(Some(text_fmt!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns,
            values
        )))
    }

    /// Renders the whole set as an aligned ASCII table. Borrows immutably;
    /// the data cursor is not disturbed.
    pub fn text_report(&self) -> TextBuf {
        let mut out = TextBuf::new();
        self.write_separator(&mut out);
        if let Some(headers) = &self.headers {
            self.write_row(&mut out, headers);
            self.write_separator(&mut out);
        }
        for record in self.records.iter() {
            self.write_row(&mut out, record);
        }
        self.write_separator(&mut out);
        out
    }

    fn write_separator(&self, out: &mut TextBuf) {
        for &width in self.widths.iter() {
            out.append_str("+");
            for _ in 0..width + 2 {
                out.append_str("-");
            }
        }
        out.append_str("+\n");
    }

    fn write_row(&self, out: &mut TextBuf, record: &Record) {
        for (index, &width) in self.widths.iter().enumerate() {
            out.append_str("| ");
            let written = match record.field(index) {
                Some(field) => {
                    out.append(field);
                    field.len()
                }
                None => 0,
            };
            for _ in written..width {
                out.append_str(" ");
            }
            out.append_str(" ");
        }
        out.append_str("|\n");
    }

    fn check_arity(&self, record: &Record) -> Result<()> {
        if record.field_count() != self.field_count {
            return Err(Error::FieldCount {
                expected: self.field_count,
                found: record.field_count(),
            });
        }
        Ok(())
    }

    fn update_widths(&mut self, record: &Record) {
        for index in 0..self.field_count {
            let length = record.field(index).map_or(0, TextBuf::len);
            if length > self.widths[index] {
                self.widths[index] = length;
            }
        }
    }
}
