// Capacity-checked sequences for data read across the analyzer boundary

use std::ops::Deref;

/// A sequence that is known to hold at most `capacity` items.
///
/// The only way to build one is [`Bounded::clip`], so holding a `Bounded`
/// means the capacity check has already happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounded<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Bounded<T> {
    /// Keep the first `capacity` items. Returns the bounded sequence and the
    /// number of items that were cut off.
    pub fn clip(mut items: Vec<T>, capacity: usize) -> (Self, usize) {
        let dropped = items.len().saturating_sub(capacity);
        items.truncate(capacity);
        (Self { items, capacity }, dropped)
    }

    pub fn empty(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keep only items matching `keep`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for Bounded<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}
