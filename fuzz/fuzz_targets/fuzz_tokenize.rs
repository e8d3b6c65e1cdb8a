//! Fuzz testing for record tokenization.
//!
//! Splitting a line at a delimiter must yield one field per delimiter
//! plus one, and re-joining the fields must reproduce the original bytes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use gledger::{Record, TextBuf};

#[derive(Debug, Arbitrary)]
struct TokenizeInput {
    line: Vec<u8>,
    delim: u8,
}

fuzz_target!(|input: TokenizeInput| {
    let line = TextBuf::from_bytes(&input.line);
    let record = Record::tokenize(&line, input.delim);

    let delims = input.line.iter().filter(|&&b| b == input.delim).count();
    assert_eq!(record.field_count(), delims + 1);

    let rejoined = record.to_delim_string(input.delim);
    assert_eq!(rejoined.as_bytes(), line.as_bytes());
});
