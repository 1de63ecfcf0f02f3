//! Fixed-capacity entity pools
//!
//! Slots are allocated first-fit by linear scan and never compacted, so
//! iteration order is index order and stays stable within a frame.

/// An entry that can tell whether its slot is free for reuse
pub trait Slot: Default {
    fn is_free(&self) -> bool;
}

/// A pool of exactly `N` slots
#[derive(Debug, Clone, PartialEq)]
pub struct Pool<T, const N: usize> {
    slots: [T; N],
}

impl<T: Slot, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Slot, const N: usize> Pool<T, N> {
    /// Create a pool with every slot free
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| T::default()),
        }
    }

    /// Index of the first free slot, if any
    pub fn allocate(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_free())
    }

    /// Write `item` into the first free slot. Returns `None` and leaves the
    /// pool untouched when every slot is taken.
    pub fn spawn(&mut self, item: T) -> Option<usize> {
        let index = self.allocate()?;
        self.slots[index] = item;
        Some(index)
    }

    /// Mark a slot free. Out-of-range indices are ignored.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = T::default();
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = T::default());
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    /// All slots, free or not, in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    /// Occupied slots with their indices
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots.iter().enumerate().filter(|(_, s)| !s.is_free())
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_free()).count()
    }

    pub fn is_full(&self) -> bool {
        self.allocate().is_none()
    }
}

impl<T, const N: usize> std::ops::Index<usize> for Pool<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T, const N: usize> std::ops::IndexMut<usize> for Pool<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}
