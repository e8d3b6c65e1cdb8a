//! # Record Rows
//!
//! A [`Record`] is one row: a fixed number of field slots, each holding an
//! owned [`TextBuf`]. Arity is fixed at creation; `set_field` on a populated
//! slot drops the prior value. [`Record::tokenize`] builds a row from a
//! delimited line by repeated buffer splitting, and the string builders turn
//! a row back into delimited text or a SQL `VALUES` fragment.

use crate::collections::Slots;
use crate::records::FieldType;
use crate::text::TextBuf;

#[derive(Debug)]
pub struct Record {
    fields: Slots<TextBuf>,
}

impl Record {
    /// Row with `field_count` empty slots.
    pub fn new(field_count: usize) -> Record {
        Record {
            fields: Slots::new(field_count),
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Stores a field value, dropping whatever occupied the slot.
    ///
    /// Panics when `index` is outside the row's arity.
    pub fn set_field(&mut self, index: usize, value: TextBuf) {
        self.fields.set(index, value);
    }

    /// `None` for an unset slot or an index outside the arity.
    pub fn field(&self, index: usize) -> Option<&TextBuf> {
        self.fields.get(index)
    }

    /// Populated fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = &TextBuf> {
        self.fields.iter()
    }

    /// Splits `text` on `delim` into a row, one field per token. A line
    /// without the delimiter becomes a one-field row; trailing delimiters
    /// produce empty trailing fields.
    pub fn tokenize(text: &TextBuf, delim: u8) -> Record {
        let count = text.as_bytes().iter().filter(|&&b| b == delim).count() + 1;
        let mut record = Record::new(count);
        let mut index = 0;
        let mut rest = text.clone();
        while let Some((token, remainder)) = rest.split(delim) {
            record.set_field(index, token);
            index += 1;
            rest = remainder;
        }
        record.set_field(index, rest);
        record
    }

    /// Fields joined by `delim`. Unset slots contribute empty strings.
    pub fn to_delim_string(&self, delim: u8) -> TextBuf {
        let mut out = TextBuf::new();
        for index in 0..self.field_count() {
            if index > 0 {
                out.append_bytes(&[delim]);
            }
            if let Some(field) = self.field(index) {
                out.append(field);
            }
        }
        out
    }

    /// Fields comma-joined with every value single-quoted, for a SQL
    /// `VALUES (...)` clause.
    pub fn to_values_string(&self) -> TextBuf {
        self.values_string(|_| true)
    }

    /// Like [`to_values_string`](Self::to_values_string), but only columns
    /// typed [`FieldType::String`] are quoted; numeric and boolean columns
    /// are emitted bare. Columns beyond `types` fall back to `String`.
    pub fn to_values_string_typed(&self, types: &[FieldType]) -> TextBuf {
        self.values_string(|index| types.get(index).copied().unwrap_or_default().is_quoted())
    }

    fn values_string(&self, quoted: impl Fn(usize) -> bool) -> TextBuf {
        let mut out = TextBuf::new();
        for index in 0..self.field_count() {
            if index > 0 {
                out.append_str(",");
            }
            match self.field(index) {
                Some(field) if quoted(index) => out.append(&quote_sql(field)),
                Some(field) => out.append(field),
                None if quoted(index) => out.append_str("''"),
                None => {}
            }
        }
        out
    }
}

/// Single-quotes a value, doubling any embedded quote so the result stays
/// executable SQL.
fn quote_sql(field: &TextBuf) -> TextBuf {
    if !field.as_bytes().contains(&b'\'') {
        return field.decorate("'", "'");
    }
    let mut out = TextBuf::with_capacity(field.len() + 2);
    out.append_str("'");
    for &byte in field.as_bytes() {
        if byte == b'\'' {
            out.append_str("''");
        } else {
            out.append_bytes(&[byte]);
        }
    }
    out.append_str("'");
    out
}
