//! # Cursor List
//!
//! An ordered owning sequence with amortized O(1) `append`, tail removal,
//! and a bidirectional cursor. Storage is contiguous; the cursor is an index
//! with `Some(pos)` always in bounds and `None` covering both "never
//! positioned" and "exhausted".
//!
//! Mutation and the cursor interact in exactly one place: removing the
//! element the cursor rests on (`remove_tail` of the last element, or
//! `clear`) invalidates it to the exhausted state. Appending never moves it,
//! and appending after exhaustion does not revive it; callers re-seek.

#[derive(Debug)]
pub struct CursorList<T> {
    items: Vec<T>,
    cursor: Option<usize>,
}

impl<T> CursorList<T> {
    pub fn new() -> CursorList<T> {
        CursorList {
            items: Vec::new(),
            cursor: None,
        }
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the last element.
    pub fn remove_tail(&mut self) -> Option<T> {
        let removed = self.items.pop();
        if let Some(pos) = self.cursor {
            if pos >= self.items.len() {
                self.cursor = None;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = None;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Positions the cursor on the first element.
    pub fn seek_start(&mut self) {
        self.cursor = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Positions the cursor on the last element.
    pub fn seek_end(&mut self) {
        self.cursor = self.items.len().checked_sub(1);
    }

    /// Returns the element under the cursor and advances forward.
    pub fn next(&mut self) -> Option<&T> {
        let pos = self.cursor?;
        self.cursor = if pos + 1 < self.items.len() {
            Some(pos + 1)
        } else {
            None
        };
        self.items.get(pos)
    }

    /// Returns the element under the cursor and moves backward.
    pub fn prev(&mut self) -> Option<&T> {
        let pos = self.cursor?;
        self.cursor = pos.checked_sub(1);
        self.items.get(pos)
    }

    /// Plain iteration, independent of the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for CursorList<T> {
    fn default() -> CursorList<T> {
        CursorList::new()
    }
}
