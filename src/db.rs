//! # Database Glue
//!
//! The database itself lives behind [`DbConnection`], implemented by an
//! external driver layer. This module supplies the plumbing around it:
//! bulk-loading a delimited sample-data file as `INSERT` statements and
//! turning a query's result set into a titled [`Report`].
//!
//! Loading aborts on the first failed statement; rows before it stay
//! executed, so callers decide whether to retry or roll back.

use std::path::Path;

use eyre::WrapErr;
use tracing::info;

use crate::files::read_delim_file;
use crate::records::{RecordSet, Report};
use crate::text::TextBuf;

/// Connection to an external database layer.
pub trait DbConnection {
    /// Executes a statement that returns no rows.
    fn execute(&mut self, query: &TextBuf) -> eyre::Result<()>;

    /// Runs a query and collects its rows, headers included.
    fn query(&mut self, query: &TextBuf) -> eyre::Result<RecordSet>;
}

/// Executes one `INSERT` per data row of `data` against `db`, in insertion
/// order, returning the number of rows inserted.
pub fn load_sample_data<D: DbConnection>(
    db: &mut D,
    table: &str,
    data: &mut RecordSet,
) -> eyre::Result<usize> {
    info!(table, records = data.num_records(), "loading sample data");

    data.seek_start();
    let mut executed = 0;
    while let Some(query) = data.next_insert_query(table)? {
        db.execute(&query)
            .wrap_err_with(|| format!("insert {} into `{}` failed", executed + 1, table))?;
        executed += 1;
    }
    Ok(executed)
}

/// Reads the delimited file at `path` and bulk-loads it into `table`.
pub fn load_delim_file<D: DbConnection>(
    db: &mut D,
    table: &str,
    path: impl AsRef<Path>,
    delim: u8,
) -> eyre::Result<usize> {
    let path = path.as_ref();
    let mut data = read_delim_file(path, delim)
        .wrap_err_with(|| format!("could not read sample data from {}", path.display()))?;
    load_sample_data(db, table, &mut data)
}

/// Runs `query` and wraps the rendered result table in a titled report.
pub fn report_from_query<D: DbConnection>(
    db: &mut D,
    title: &str,
    query: &TextBuf,
) -> eyre::Result<Report> {
    let results = db.query(query).wrap_err("report query failed")?;
    let mut report = Report::new();
    report.set_title(TextBuf::from(title));
    report.set_body(results.text_report());
    Ok(report)
}
