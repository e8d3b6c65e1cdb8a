//! # Ordered Collections
//!
//! Two small owning containers shared by the record layer:
//!
//! - [`CursorList<T>`]: a growable ordered sequence with tail operations and
//!   a bidirectional internal cursor. Record sets keep their data rows here.
//! - [`Slots<T>`]: a fixed-size array of optional slots with displacement on
//!   overwrite and a forward cursor. Records keep their fields here.
//!
//! ## Cursor Protocol
//!
//! Both containers share one protocol: `seek_start` (and `seek_end` for the
//! list) positions the cursor, `next` returns the element under it and
//! advances. A freshly built collection has no cursor position, so `next`
//! returns `None` until the first seek. Walking past the end leaves the
//! cursor exhausted: every further call returns `None` until the next seek.
//!
//! Elements are owned by value. Dropping the collection drops its elements;
//! removal hands the element back to the caller instead of destroying it.

mod list;
mod slots;

pub use list::CursorList;
pub use slots::Slots;
