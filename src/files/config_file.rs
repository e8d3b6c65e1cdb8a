//! Configuration file reader.
//!
//! The format is one `key = value` pair per line. Whitespace around both
//! key and value is trimmed, so `hostname = localhost` and `hostname=localhost`
//! parse identically. Blank lines and comment lines are skipped anywhere in
//! the file. A non-comment line without `=` stops the read with a malformed
//! error naming the offending line.
//!
//! Duplicate keys follow map semantics: both pairs are stored and lookups
//! return the earliest insertion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::files::MAX_LINE_LEN;
use crate::map::StrMap;
use crate::text::TextBuf;

/// Bucket count for the map holding the parsed pairs.
const CONFIG_MAP_BUCKETS: usize = 100;

/// Reads and parses the configuration file at `path`.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<StrMap> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::file_open(path, source))?;
    let map = read_config(&mut BufReader::new(file))?;
    debug!(path = %path.display(), entries = map.len(), "read configuration file");
    Ok(map)
}

/// Parses configuration pairs from any buffered source.
pub fn read_config<R: BufRead>(src: &mut R) -> Result<StrMap> {
    let mut map = StrMap::new(CONFIG_MAP_BUCKETS);
    let mut line = TextBuf::new();
    let mut line_no = 0;

    while line.read_line(MAX_LINE_LEN, src)? {
        line_no += 1;
        line.trim_leading();
        if line.is_empty() || line.byte_at(0) == Some(b'#') {
            continue;
        }

        let (mut key, mut value) = match line.split(b'=') {
            Some(pair) => pair,
            None => return Err(Error::malformed(line_no, "line contains no '='")),
        };
        key.trim();
        value.trim();
        map.insert_bufs(key, value);
    }

    Ok(map)
}
