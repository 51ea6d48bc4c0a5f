//! A single host-memory tile buffer.

use tilestore_core::{Component, StorageError, StorageInstanceId};

/// One physical buffer capable of holding one tile's worth of data.
///
/// The slot exclusively owns its buffer: the `Box<[T]>` is allocated once
/// at construction, never resized, and released exactly once when the slot
/// drops. The element count is stored only as the boxed slice's length, so
/// it cannot diverge from the allocation.
///
/// Reading and writing contents is the borrowing producer's concern; the
/// slot guarantees only that the buffer exists, has the declared size, and
/// stays valid for the slot's lifetime.
#[derive(Debug)]
pub struct Slot<T> {
    /// The tile data. Zero-initialised at allocation.
    data: Box<[T]>,
    /// Instance ID of the pool that owns this slot.
    owner: StorageInstanceId,
}

impl<T: Component> Slot<T> {
    /// Allocate a zero-initialised buffer of `element_count` elements.
    ///
    /// Returns [`StorageError::AllocationFailed`] if the host allocation
    /// fails; nothing is retained in that case.
    ///
    /// # Panics
    ///
    /// Panics if `element_count` is zero — every slot holds at least one
    /// element (a validated layout cannot produce fewer), so a zero count
    /// is a programming error in the owning pool.
    pub fn new(owner: StorageInstanceId, element_count: usize) -> Result<Self, StorageError> {
        assert!(
            element_count > 0,
            "slot must hold at least one element"
        );
        let mut buf: Vec<T> = Vec::new();
        buf.try_reserve_exact(element_count)
            .map_err(|_| StorageError::AllocationFailed {
                requested_bytes: element_count.saturating_mul(std::mem::size_of::<T>()),
            })?;
        buf.resize(element_count, T::default());
        Ok(Self {
            data: buf.into_boxed_slice(),
            owner,
        })
    }
}

impl<T> Slot<T> {
    /// Number of elements in the buffer. Fixed for the slot's lifetime.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Instance ID of the owning pool.
    pub fn owner(&self) -> StorageInstanceId {
        self.owner
    }

    /// The tile data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The tile data, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_zero_initialised() {
        let slot: Slot<f32> = Slot::new(StorageInstanceId::next(), 64).unwrap();
        assert_eq!(slot.len(), 64);
        assert!(slot.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn written_data_persists() {
        let mut slot: Slot<u8> = Slot::new(StorageInstanceId::next(), 16).unwrap();
        slot.as_mut_slice()[0] = 0xAB;
        slot.as_mut_slice()[15] = 0xCD;
        assert_eq!(slot.as_slice()[0], 0xAB);
        assert_eq!(slot.as_slice()[15], 0xCD);
    }

    #[test]
    fn len_never_changes() {
        let mut slot: Slot<u16> = Slot::new(StorageInstanceId::next(), 32).unwrap();
        slot.as_mut_slice().fill(7);
        assert_eq!(slot.len(), 32);
    }

    #[test]
    fn owner_is_recorded() {
        let owner = StorageInstanceId::next();
        let slot: Slot<i32> = Slot::new(owner, 8).unwrap();
        assert_eq!(slot.owner(), owner);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn zero_length_slot_is_rejected() {
        let _ = Slot::<f64>::new(StorageInstanceId::next(), 0);
    }
}
