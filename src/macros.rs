//! # Internal Macros
//!
//! ## text_fmt!
//!
//! Builds a [`TextBuf`](crate::text::TextBuf) from a format template with
//! an exact-fit allocation: the arguments are measured first and the buffer
//! is sized once before the text is written.
//!
//! ### Usage
//!
//! ```
//! use gledger::text_fmt;
//!
//! let greeting = text_fmt!("hello, {}", "world");
//! assert_eq!(greeting, "hello, world");
//! assert_eq!(greeting.capacity(), greeting.len() + 1);
//! ```

/// Builds an exact-fit [`TextBuf`](crate::text::TextBuf) from format
/// arguments.
#[macro_export]
macro_rules! text_fmt {
    ($($arg:tt)*) => {
        $crate::text::TextBuf::format(::std::format_args!($($arg)*))
    };
}
