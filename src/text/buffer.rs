//! # Owned Text Buffer
//!
//! [`TextBuf`] owns a heap allocation and tracks the active length and the
//! allocated capacity separately. One spare byte beyond the content is always
//! allocated, so `len < capacity` holds at all times.
//!
//! ## Memory Layout
//!
//! ```text
//! +-------------------------------+----------------+
//! | content bytes (len)           | spare capacity |
//! +-------------------------------+----------------+
//! ^                               ^                ^
//! buf[0]                          buf[len]         buf[capacity]
//! ```
//!
//! ## Growth Policy
//!
//! | Operation | Allocation behavior |
//! |-----------|---------------------|
//! | `new` / `From` / `from_bytes` | exact fit: `len + 1` |
//! | `format` | dry-run length pass, then one exact allocation |
//! | `append*` | geometric: double the capacity, or the exact need if larger |
//! | `assign*` | reuse current capacity when sufficient, else exact fit |
//! | `truncate` / `size_to_fit` | shrink to exact fit |
//!
//! Appends grow geometrically so that building a report line by line stays
//! linear in the output size.
//!
//! ## Line Reading
//!
//! [`TextBuf::read_line`] fills the buffer from any [`BufRead`] source,
//! reading at most `max_size - 1` bytes or up to a newline, stripping one
//! trailing `\n`. End of input is an `Ok(false)` return, not an error, which
//! keeps `while buf.read_line(..)?` loops flat.
//!
//! ## Text Encoding
//!
//! Content is raw bytes. Comparison, hashing, splitting, and width
//! accounting are all byte-wise; [`TextBuf::to_string_lossy`] is the bridge
//! to `str` for display and parsing.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::io::{BufRead, Read};

use crate::error::Result;
use crate::text::djb2;

pub struct TextBuf {
    buf: Box<[u8]>,
    len: usize,
}

impl TextBuf {
    /// Empty buffer with the minimum allocation.
    pub fn new() -> TextBuf {
        TextBuf::with_capacity(0)
    }

    /// Empty buffer that can hold `capacity` content bytes without growing.
    pub fn with_capacity(capacity: usize) -> TextBuf {
        TextBuf {
            buf: vec![0u8; capacity + 1].into_boxed_slice(),
            len: 0,
        }
    }

    /// Buffer holding a copy of `bytes`, allocated to exact fit.
    pub fn from_bytes(bytes: &[u8]) -> TextBuf {
        let mut out = TextBuf::with_capacity(bytes.len());
        out.buf[..bytes.len()].copy_from_slice(bytes);
        out.len = bytes.len();
        out
    }

    /// Builds a buffer from a format template in two passes: a dry run
    /// counts the exact byte length, then a single allocation of that size
    /// is formatted into. Use through [`crate::text_fmt!`].
    pub fn format(args: fmt::Arguments<'_>) -> TextBuf {
        struct Counter(usize);

        impl fmt::Write for Counter {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0 += s.len();
                Ok(())
            }
        }

        let mut counter = Counter(0);
        fmt::write(&mut counter, args)
            .expect("a formatting trait implementation returned an error");
        let mut out = TextBuf::with_capacity(counter.0);
        fmt::write(&mut out, args)
            .expect("a formatting trait implementation returned an error");
        out
    }

    /// Active content length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Allocated size in bytes. Always greater than [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops the content, keeping the allocation.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Appends another buffer's content.
    pub fn append(&mut self, other: &TextBuf) {
        self.append_bytes(other.as_bytes());
    }

    pub fn append_str(&mut self, s: &str) {
        self.append_bytes(s.as_bytes());
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        let end = self.len + bytes.len();
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
    }

    /// Replaces the content, reusing the allocation when it is big enough.
    pub fn assign(&mut self, other: &TextBuf) {
        self.assign_bytes(other.as_bytes());
    }

    pub fn assign_str(&mut self, s: &str) {
        self.assign_bytes(s.as_bytes());
    }

    pub fn assign_bytes(&mut self, bytes: &[u8]) {
        if bytes.len() + 1 > self.buf.len() {
            self.len = 0;
            self.realloc(bytes.len() + 1);
        }
        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
    }

    /// Clamps the content to `length` bytes and, when `length + 1` is below
    /// the current capacity, shrinks the allocation to exactly that.
    pub fn truncate(&mut self, length: usize) {
        if length < self.len {
            self.len = length;
        }
        if length + 1 < self.buf.len() {
            self.realloc(length + 1);
        }
    }

    /// Shrinks the allocation to `len + 1`.
    pub fn size_to_fit(&mut self) {
        if self.buf.len() > self.len + 1 {
            self.realloc(self.len + 1);
        }
    }

    /// New buffer holding the first `n` bytes, clamped to the full length.
    pub fn substr_left(&self, n: usize) -> TextBuf {
        let n = n.min(self.len);
        TextBuf::from_bytes(&self.buf[..n])
    }

    /// New buffer holding the last `n` bytes, clamped to the full length.
    pub fn substr_right(&self, n: usize) -> TextBuf {
        let n = n.min(self.len);
        TextBuf::from_bytes(&self.buf[self.len - n..self.len])
    }

    /// Splits at the first occurrence of `delim`, excluding the delimiter
    /// from both halves. `None` when the delimiter is absent, which is how
    /// the config reader detects a line with no `=`.
    pub fn split(&self, delim: u8) -> Option<(TextBuf, TextBuf)> {
        let idx = self.as_bytes().iter().position(|&b| b == delim)?;
        let left = TextBuf::from_bytes(&self.buf[..idx]);
        let right = TextBuf::from_bytes(&self.buf[idx + 1..self.len]);
        Some((left, right))
    }

    pub fn trim_leading(&mut self) {
        let start = self
            .as_bytes()
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(self.len);
        if start > 0 {
            self.buf.copy_within(start..self.len, 0);
            self.len -= start;
        }
    }

    pub fn trim_trailing(&mut self) {
        while self.len > 0 && self.buf[self.len - 1].is_ascii_whitespace() {
            self.len -= 1;
        }
    }

    /// Removes leading and trailing ASCII whitespace in place. Idempotent.
    pub fn trim(&mut self) {
        self.trim_trailing();
        self.trim_leading();
    }

    /// djb2 over the content bytes. See [`crate::text::djb2`].
    pub fn hash(&self) -> u64 {
        djb2(self.as_bytes())
    }

    /// New buffer `prefix + self + suffix`.
    pub fn decorate(&self, prefix: &str, suffix: &str) -> TextBuf {
        let mut out = TextBuf::with_capacity(prefix.len() + self.len + suffix.len());
        out.append_str(prefix);
        out.append(self);
        out.append_str(suffix);
        out
    }

    /// Parses the whole content as an integer in the given radix. Leading
    /// whitespace is accepted; anything trailing the digits fails.
    pub fn parse_int(&self, radix: u32) -> Option<i64> {
        let s = std::str::from_utf8(self.as_bytes()).ok()?;
        i64::from_str_radix(s.trim_start(), radix).ok()
    }

    /// Parses the whole content as a float, same trailing rules as
    /// [`parse_int`](Self::parse_int).
    pub fn parse_float(&self) -> Option<f64> {
        let s = std::str::from_utf8(self.as_bytes()).ok()?;
        s.trim_start().parse().ok()
    }

    /// Replaces the content with the next line from `src`.
    ///
    /// Reads at most `max_size - 1` bytes, or up to and including a newline,
    /// then strips one trailing `\n`. Returns `Ok(false)` at end of input,
    /// leaving the content untouched. A line longer than the limit comes
    /// back in `max_size - 1` byte pieces, like `fgets`.
    pub fn read_line<R: BufRead>(&mut self, max_size: usize, src: &mut R) -> Result<bool> {
        let mut line: Vec<u8> = Vec::new();
        let limit = max_size.saturating_sub(1) as u64;
        src.by_ref().take(limit).read_until(b'\n', &mut line)?;
        if line.is_empty() {
            return Ok(false);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        self.assign_bytes(&line);
        Ok(true)
    }

    fn reserve(&mut self, additional: usize) {
        let required = self.len + additional + 1;
        if required > self.buf.len() {
            let doubled = self.buf.len().saturating_mul(2);
            self.realloc(required.max(doubled));
        }
    }

    fn realloc(&mut self, new_size: usize) {
        debug_assert!(new_size > self.len);
        let mut grown = vec![0u8; new_size].into_boxed_slice();
        grown[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = grown;
    }
}

impl Default for TextBuf {
    fn default() -> TextBuf {
        TextBuf::new()
    }
}

impl Clone for TextBuf {
    // Clones to exact fit rather than copying spare capacity.
    fn clone(&self) -> TextBuf {
        TextBuf::from_bytes(self.as_bytes())
    }
}

impl From<&str> for TextBuf {
    fn from(s: &str) -> TextBuf {
        TextBuf::from_bytes(s.as_bytes())
    }
}

impl From<String> for TextBuf {
    fn from(s: String) -> TextBuf {
        TextBuf::from_bytes(s.as_bytes())
    }
}

impl fmt::Write for TextBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }
}

impl fmt::Display for TextBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_lossy())
    }
}

impl fmt::Debug for TextBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuf")
            .field("content", &self.to_string_lossy())
            .field("len", &self.len)
            .field("capacity", &self.buf.len())
            .finish()
    }
}

impl PartialEq for TextBuf {
    fn eq(&self, other: &TextBuf) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TextBuf {}

impl PartialOrd for TextBuf {
    fn partial_cmp(&self, other: &TextBuf) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextBuf {
    fn cmp(&self, other: &TextBuf) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialEq<str> for TextBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for TextBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
