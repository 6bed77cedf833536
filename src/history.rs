//! Fixed-capacity history of previously shown items.
//!
//! [`BoundedHistoryStack`] is a LIFO buffer backed by a ring of slots.
//! Once full, every push silently overwrites the oldest retained element,
//! so the stack always holds exactly the newest `capacity` pushes.

use std::num::NonZeroUsize;
use thiserror::Error;

/// Errors raised when constructing a history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History capacity must be at least 1")]
    ZeroCapacity,
}

/// Capacity-limited LIFO stack that discards its oldest entry when full.
#[derive(Debug, Clone)]
pub struct BoundedHistoryStack<T> {
    slots: Box<[Option<T>]>,
    /// Slot of the oldest retained element.
    tail: usize,
    len: usize,
}

impl<T> BoundedHistoryStack<T> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        let slots = (0..capacity.get()).map(|_| None).collect();
        Self {
            slots,
            tail: 0,
            len: 0,
        }
    }

    /// Build a stack from a plain integer, rejecting a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, HistoryError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(HistoryError::ZeroCapacity)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push an item, evicting the oldest one if the stack is full.
    pub fn push(&mut self, item: T) {
        let capacity = self.capacity();
        if self.len < capacity {
            let slot = (self.tail + self.len) % capacity;
            self.slots[slot] = Some(item);
            self.len += 1;
        } else {
            self.slots[self.tail] = Some(item);
            self.tail = (self.tail + 1) % capacity;
        }
    }

    /// Remove and return the most recently pushed surviving item.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head()?;
        let item = self.slots[head].take();
        self.len -= 1;
        if self.len == 0 {
            self.tail = 0;
        }
        item
    }

    /// The most recently pushed item, without removing it.
    pub fn top(&self) -> Option<&T> {
        self.head().and_then(|head| self.slots[head].as_ref())
    }

    /// Retained items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |offset| self.slots[(self.tail + offset) % capacity].as_ref())
    }

    fn head(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some((self.tail + self.len - 1) % self.capacity())
        }
    }
}
