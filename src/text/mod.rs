//! # Text Buffers
//!
//! Owned, growable byte buffers backing every string value in the library:
//! map keys and values, record fields, rendered reports, and generated SQL
//! all live in [`TextBuf`]s.
//!
//! ## Module Structure
//!
//! - `buffer`: the [`TextBuf`] type itself
//! - [`djb2`]: the hash function shared with the string-keyed map

mod buffer;

pub use buffer::TextBuf;

/// djb2 hash over raw bytes.
///
/// `h = 5381; h = h * 33 + byte` with wrapping arithmetic. Deterministic
/// and stable across runs; [`crate::StrMap`] uses it for bucket selection.
pub fn djb2(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 5381;
    for &byte in bytes {
        hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn djb2_is_deterministic() {
        let a = djb2(b"journal entry");
        let b = djb2(b"journal entry");
        assert_eq!(a, b);
    }

    #[test]
    fn djb2_separates_nearby_content() {
        assert_ne!(djb2(b"debit"), djb2(b"credit"));
        assert_ne!(djb2(b"a"), djb2(b"b"));
    }

    #[test]
    fn djb2_of_empty_is_seed() {
        assert_eq!(djb2(b""), 5381);
    }
}
