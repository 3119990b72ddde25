//! `Pool`: a slot arena with free-list reuse.
//!
//! Stores values of type `T` in one contiguous vector and addresses them by slot index.
//! Freed slots are threaded into an intrusive free list and reused in O(1), so linked
//! structures (adjacency lists, twin links) can refer to each other by stable integer
//! handles instead of pointers.
//!
//! # Performance
//! - `alloc`: O(1) amortized
//! - `take`: O(1)
//! - `get` / `get_mut`: O(1), bounds and occupancy checked

/// A slot in the pool.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    /// Free slot holding the index of the next free slot.
    Free(Option<usize>),
}

/// A free-list slot arena.
#[derive(Debug, Clone)]
pub(crate) struct Pool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Pool<T> {
    /// Creates a new empty pool.
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates a new pool with room for `capacity` values before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value` and returns its slot index.
    #[inline]
    pub(crate) fn alloc(&mut self, value: T) -> usize {
        self.len += 1;

        if let Some(idx) = self.free_head {
            // Reuse slot
            let next_free = match self.slots[idx] {
                Slot::Free(next) => next,
                Slot::Occupied(_) => unreachable!("free list points to an occupied slot"),
            };
            self.free_head = next_free;
            self.slots[idx] = Slot::Occupied(value);
            idx
        } else {
            let idx = self.slots.len();
            self.slots.push(Slot::Occupied(value));
            idx
        }
    }

    /// Removes and returns the value at `index`, pushing the slot onto the free list.
    ///
    /// Returns `None` if the slot is free or out of bounds.
    #[inline]
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        if matches!(slot, Slot::Free(_)) {
            return None;
        }

        let previous = std::mem::replace(slot, Slot::Free(self.free_head));
        self.free_head = Some(index);
        self.len -= 1;

        match previous {
            Slot::Occupied(value) => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Returns a shared reference to the value at `index`.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Returns a mutable reference to the value at `index`.
    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots ever allocated (occupied or free).
    ///
    /// Any index handed out by this pool is strictly below this bound.
    #[inline]
    pub(crate) fn slot_len(&self) -> usize {
        self.slots.len()
    }

    /// Drops every value and releases all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Iterates over occupied slots as `(index, &value)`.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied(value) => Some((idx, value)),
                Slot::Free(_) => None,
            })
    }

    /// Counts the entries of the free list.
    ///
    /// Used by invariant checks: `len + free_len == slot_len` must always hold.
    pub(crate) fn free_len(&self) -> usize {
        let mut count = 0;
        let mut curr = self.free_head;
        while let Some(idx) = curr {
            count += 1;
            if count > self.slots.len() {
                // Cyclic free list; report an impossible count.
                return usize::MAX;
            }
            curr = match self.slots.get(idx) {
                Some(Slot::Free(next)) => *next,
                _ => return usize::MAX,
            };
        }
        count
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut pool = Pool::new();
        let a = pool.alloc("a");
        let b = pool.alloc("b");

        assert_eq!(pool.get(a), Some(&"a"));
        assert_eq!(pool.get(b), Some(&"b"));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(7), None);
    }

    #[test]
    fn test_take_reuses_slot() {
        let mut pool = Pool::with_capacity(4);
        let a = pool.alloc(1);
        let b = pool.alloc(2);

        assert_eq!(pool.take(a), Some(1));
        assert_eq!(pool.get(a), None);
        assert_eq!(pool.take(a), None, "double take must be rejected");
        assert_eq!(pool.len(), 1);

        // LIFO free list hands the freed slot back first.
        let c = pool.alloc(3);
        assert_eq!(c, a);
        assert_eq!(pool.get(b), Some(&2));
        assert_eq!(pool.slot_len(), 2);
    }

    #[test]
    fn test_free_list_accounting() {
        let mut pool = Pool::new();
        let ids: Vec<_> = (0..10).map(|i| pool.alloc(i)).collect();
        for &id in ids.iter().step_by(2) {
            pool.take(id);
        }

        assert_eq!(pool.len(), 5);
        assert_eq!(pool.free_len(), 5);
        assert_eq!(pool.len() + pool.free_len(), pool.slot_len());

        let odd: Vec<_> = pool.iter().map(|(_, v)| *v).collect();
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_get_mut_and_clear() {
        let mut pool = Pool::new();
        let a = pool.alloc(String::from("x"));
        pool.get_mut(a).unwrap().push('y');
        assert_eq!(pool.get(a).map(String::as_str), Some("xy"));

        pool.clear();
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.slot_len(), 0);
        assert_eq!(pool.get(a), None);
    }
}
