//! The dynamic-array-backed list.
//!
//! [`ArrayList`] stores its elements in a single slot buffer allocated to
//! exactly `capacity` slots, with the live elements packed into `[0, len)`
//! in insertion order. Inserts and removals shift the tail within the
//! buffer; a resize allocates a fresh buffer, moves the live elements
//! across in order, and releases the old one. The buffer is exclusively
//! owned: reads hand out borrows that cannot outlive the next mutation,
//! so no reference into a retired buffer can survive a resize.

use std::fmt;

use crate::error::ListError;
use crate::policy;

/// An ordered, index-addressable sequence with amortized O(1) growth.
///
/// The backing buffer starts at capacity 0, doubles when an insert finds
/// it full, and halves once removals leave it quarter-full. All five
/// index-taking operations validate their index before mutating anything,
/// so a call that fails with [`ListError::OutOfRange`] leaves the list
/// untouched.
pub struct ArrayList<T> {
    /// Slot buffer, allocated to exactly `capacity` slots.
    /// Slots `[0, len)` are occupied; the rest are empty.
    slots: Vec<Option<T>>,
    /// Number of live elements.
    len: usize,
}

impl<T> ArrayList<T> {
    /// Create an empty list. No allocation happens until the first insert.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always at least [`len`](Self::len).
    ///
    /// The growth/shrink policy behind this value is internal; callers
    /// should only rely on it staying proportional to the live length.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Borrow the element at `index`.
    ///
    /// Fails with [`ListError::OutOfRange`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        Ok(self.occupied(index))
    }

    /// Replace the element at `index` with `value`, returning the prior
    /// element.
    ///
    /// Never changes the length or the capacity. Fails with
    /// [`ListError::OutOfRange`] when `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        let prior = self.slots[index].replace(value);
        Ok(prior.expect("slot in [0, len) is occupied"))
    }

    /// Insert `value` so that it becomes the element at `index`, shifting
    /// the elements at `[index, len)` one slot toward the end.
    ///
    /// `index == len` appends. Fails with [`ListError::OutOfRange`] when
    /// `index > len`. Grows the buffer first when it is full, moving the
    /// existing elements into the new buffer in order.
    pub fn add(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        if self.len == self.slots.len() {
            self.resize(policy::grown_capacity(self.slots.len()));
        }

        // Slot `len` is empty, so the rotation drags an empty slot down
        // to `index` while shifting the tail up by one.
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the elements at
    /// `[index + 1, len)` one slot toward the start.
    ///
    /// Fails with [`ListError::OutOfRange`] when `index >= len`. Shrinks
    /// the buffer afterwards when the removal leaves it quarter-full.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        let value = self.slots[index]
            .take()
            .expect("slot in [0, len) is occupied");

        // Drag the now-empty slot to the end of the occupied region.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;

        if policy::should_shrink(self.len, self.slots.len()) {
            self.resize(policy::shrunk_capacity(self.slots.len()));
        }
        Ok(value)
    }

    /// Replace the buffer with a fresh one of `new_capacity` slots,
    /// moving the live elements across in order.
    ///
    /// The policy module guarantees `new_capacity >= len` at every call
    /// site; the old buffer is released when `slots` is reassigned.
    fn resize(&mut self, new_capacity: usize) {
        let mut next: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        next.extend(self.slots[..self.len].iter_mut().map(Option::take));
        next.resize_with(new_capacity, || None);
        self.slots = next;
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::OutOfRange {
            index,
            len: self.len,
        }
    }

    /// Borrow an occupied slot. Callers must have bounds-checked `index`.
    fn occupied(&self, index: usize) -> &T {
        self.slots[index]
            .as_ref()
            .expect("slot in [0, len) is occupied")
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots[..self.len].iter().flatten())
            .finish()
    }
}
