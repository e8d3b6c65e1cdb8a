//! # Fixed Slots
//!
//! A fixed-size array of optional slots. `set` on a populated index hands
//! back the displaced element; `get` is `None` for empty slots and out of
//! range alike. The forward cursor yields occupied slots in index order and
//! follows the shared protocol described in the module docs of
//! [`crate::collections`].

#[derive(Debug)]
pub struct Slots<T> {
    slots: Box<[Option<T>]>,
    cursor: usize,
}

impl<T> Slots<T> {
    /// `size` empty slots. The size never changes afterward.
    pub fn new(size: usize) -> Slots<T> {
        Slots {
            slots: (0..size).map(|_| None).collect(),
            cursor: size,
        }
    }

    /// Fixed slot count, occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stores `value` at `index`, returning whatever occupied the slot.
    ///
    /// Panics when `index` is out of range; the slot count is part of the
    /// caller's schema.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Empties every slot, dropping the occupants.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.cursor = self.slots.len();
    }

    pub fn seek_start(&mut self) {
        self.cursor = 0;
    }

    /// Next occupied slot's element, advancing the cursor past it.
    pub fn next(&mut self) -> Option<&T> {
        while self.cursor < self.slots.len() {
            let index = self.cursor;
            self.cursor += 1;
            if self.slots[index].is_some() {
                return self.slots[index].as_ref();
            }
        }
        None
    }

    /// Occupied slots in index order, independent of the cursor.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}
