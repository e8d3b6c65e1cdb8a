//! Delimited sample-data reader.
//!
//! The first content line names the columns. An optional second content
//! line tags each column with a type from `string`, `integer`, `double`,
//! or `boolean`; the line counts as a type row only when every field is a
//! recognized tag and the arity matches the header, otherwise it is data.
//! Untagged columns default to `string`. Every later content line is one
//! data row whose arity must match the header.
//!
//! Blank lines and comment lines are skipped anywhere, but still count
//! toward the line numbers reported in malformed errors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;
use tracing::debug;

use crate::error::{Error, Result};
use crate::files::MAX_LINE_LEN;
use crate::records::{FieldType, Record, RecordSet};
use crate::text::TextBuf;

/// Reads the delimited file at `path` into a [`RecordSet`].
pub fn read_delim_file(path: impl AsRef<Path>, delim: u8) -> Result<RecordSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::file_open(path, source))?;
    let set = read_delim(&mut BufReader::new(file), delim)?;
    debug!(
        path = %path.display(),
        records = set.num_records(),
        "read delimited file"
    );
    Ok(set)
}

/// Parses delimited rows from any buffered source.
pub fn read_delim<R: BufRead>(src: &mut R, delim: u8) -> Result<RecordSet> {
    let mut line = TextBuf::new();
    let mut line_no = 0;

    let headers = match next_record(src, delim, &mut line, &mut line_no)? {
        Some(record) => record,
        None => return Err(Error::malformed(line_no.max(1), "no header line")),
    };
    let field_count = headers.field_count();

    let mut set = RecordSet::new(field_count);
    set.set_headers(headers)?;

    let mut expect_types = true;
    while let Some(record) = next_record(src, delim, &mut line, &mut line_no)? {
        if expect_types {
            expect_types = false;
            if record.field_count() == field_count {
                if let Some(tags) = type_tags(&record) {
                    for (index, tag) in tags.into_iter().enumerate() {
                        set.set_type(index, tag);
                    }
                    continue;
                }
            }
        }

        if record.field_count() != field_count {
            return Err(Error::malformed(
                line_no,
                format!(
                    "expected {} fields, found {}",
                    field_count,
                    record.field_count()
                ),
            ));
        }
        set.add_record(record)?;
    }

    Ok(set)
}

/// Next content line tokenized into a record, `Ok(None)` at end of input.
/// `line_no` counts every physical line, skipped ones included.
fn next_record<R: BufRead>(
    src: &mut R,
    delim: u8,
    line: &mut TextBuf,
    line_no: &mut usize,
) -> Result<Option<Record>> {
    while line.read_line(MAX_LINE_LEN, src)? {
        *line_no += 1;
        line.trim_leading();
        if line.is_empty() || line.byte_at(0) == Some(b'#') {
            continue;
        }
        return Ok(Some(Record::tokenize(line, delim)));
    }
    Ok(None)
}

/// All fields as recognized type tags, or `None` if any field is not one.
fn type_tags(record: &Record) -> Option<SmallVec<[FieldType; 8]>> {
    let mut tags = SmallVec::new();
    for index in 0..record.field_count() {
        let field = record.field(index)?;
        tags.push(FieldType::from_tag(field.to_string_lossy().as_ref())?);
    }
    Some(tags)
}
