//! Free/assigned slot bookkeeping shared by every storage backend.
//!
//! A [`FreeList`] tracks which slot handles of a pool are currently
//! unborrowed. It never touches buffer memory — the owning pool keeps the
//! slots themselves; the free-list only circulates their handles.

use indexmap::IndexSet;

use crate::error::StorageError;
use crate::id::SlotIndex;

/// Bookkeeping for the free handles of a fixed-capacity pool.
///
/// Backed by an `IndexSet`, which gives O(1) membership tests (to catch
/// double releases) with deterministic acquisition order. Handles are
/// acquired LIFO — the most recently released slot is lent out first, so
/// recently touched buffers stay warm. Callers must not rely on the order.
#[derive(Debug)]
pub struct FreeList {
    /// Handles currently available for lending.
    free: IndexSet<SlotIndex>,
    /// Total number of handles this list manages. Fixed after registration.
    capacity: usize,
}

impl FreeList {
    /// Create an empty free-list sized for `capacity` handles.
    ///
    /// The pool registers each slot it allocates via [`FreeList::register`];
    /// until then the list lends nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            free: IndexSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Register a freshly allocated slot as free.
    ///
    /// Called once per slot during pool initialization.
    ///
    /// # Panics
    ///
    /// Panics if the handle is out of range for the declared capacity or
    /// was already registered — both are construction-time programming
    /// errors in the owning pool, not runtime conditions.
    pub fn register(&mut self, slot: SlotIndex) {
        assert!(
            (slot.0 as usize) < self.capacity,
            "slot {} out of range for capacity {}",
            slot,
            self.capacity,
        );
        let inserted = self.free.insert(slot);
        assert!(inserted, "slot {} registered twice", slot);
    }

    /// Remove and return a free handle, or `None` if every slot is lent out.
    ///
    /// Exhaustion is not an error at this layer; the cache collaborator
    /// decides whether to wait, evict, or fail.
    pub fn acquire(&mut self) -> Option<SlotIndex> {
        self.free.pop()
    }

    /// Return a handle to circulation.
    ///
    /// Returns [`StorageError::UnknownSlot`] for a handle outside the
    /// registered range and [`StorageError::NotLent`] for a handle that is
    /// already free (double release).
    pub fn release(&mut self, slot: SlotIndex) -> Result<(), StorageError> {
        if (slot.0 as usize) >= self.capacity {
            return Err(StorageError::UnknownSlot { slot });
        }
        if !self.free.insert(slot) {
            return Err(StorageError::NotLent { slot });
        }
        Ok(())
    }

    /// Whether the given handle is currently free.
    pub fn is_free(&self, slot: SlotIndex) -> bool {
        self.free.contains(&slot)
    }

    /// Number of handles currently available.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Number of handles currently lent out.
    pub fn lent_count(&self) -> usize {
        self.capacity - self.free.len()
    }

    /// Total number of handles this list manages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_list(capacity: u32) -> FreeList {
        let mut list = FreeList::with_capacity(capacity as usize);
        for i in 0..capacity {
            list.register(SlotIndex(i));
        }
        list
    }

    #[test]
    fn acquire_drains_to_none() {
        let mut list = full_list(3);
        assert!(list.acquire().is_some());
        assert!(list.acquire().is_some());
        assert!(list.acquire().is_some());
        assert_eq!(list.acquire(), None);
        assert_eq!(list.lent_count(), 3);
    }

    #[test]
    fn release_returns_slot_to_circulation() {
        let mut list = full_list(1);
        let slot = list.acquire().unwrap();
        assert_eq!(list.free_count(), 0);
        list.release(slot).unwrap();
        assert_eq!(list.free_count(), 1);
        assert_eq!(list.acquire(), Some(slot));
    }

    #[test]
    fn double_release_is_reported() {
        let mut list = full_list(2);
        let slot = list.acquire().unwrap();
        list.release(slot).unwrap();
        assert_eq!(list.release(slot), Err(StorageError::NotLent { slot }));
    }

    #[test]
    fn out_of_range_release_is_reported() {
        let mut list = full_list(2);
        let foreign = SlotIndex(9);
        assert_eq!(
            list.release(foreign),
            Err(StorageError::UnknownSlot { slot: foreign })
        );
    }

    #[test]
    fn lifo_acquisition_order() {
        let mut list = full_list(4);
        let a = list.acquire().unwrap();
        let b = list.acquire().unwrap();
        list.release(a).unwrap();
        list.release(b).unwrap();
        // Most recently released comes back first.
        assert_eq!(list.acquire(), Some(b));
        assert_eq!(list.acquire(), Some(a));
    }

    #[test]
    fn zero_capacity_list_lends_nothing() {
        let mut list = FreeList::with_capacity(0);
        assert_eq!(list.acquire(), None);
        assert_eq!(list.free_count(), 0);
        assert_eq!(list.lent_count(), 0);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_registration_panics() {
        let mut list = FreeList::with_capacity(2);
        list.register(SlotIndex(0));
        list.register(SlotIndex(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_registration_panics() {
        let mut list = FreeList::with_capacity(1);
        list.register(SlotIndex(1));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn counts_stay_consistent(capacity in 0u32..32, acquires in 0usize..64) {
                let mut list = full_list(capacity);
                let mut lent = Vec::new();
                for _ in 0..acquires {
                    if let Some(slot) = list.acquire() {
                        lent.push(slot);
                    }
                }
                prop_assert_eq!(list.free_count() + list.lent_count(), capacity as usize);
                for slot in lent {
                    list.release(slot).unwrap();
                }
                prop_assert_eq!(list.free_count(), capacity as usize);
            }
        }
    }
}
