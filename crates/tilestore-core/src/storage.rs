//! The storage-backend abstraction.

use crate::error::StorageError;
use crate::id::SlotIndex;

/// A fixed-capacity store of equally-sized tile slots.
///
/// Implemented by each storage kind — the CPU pool in `tilestore-cpu`,
/// and by device-resident pools that keep their buffers on the GPU. The
/// cache collaborator drives eviction and reuse entirely through this
/// trait; it never sees buffer memory directly.
pub trait TileStorage {
    /// Edge length of one square tile, in pixels.
    fn tile_size(&self) -> u32;

    /// Total number of slots, fixed for the storage's lifetime.
    fn capacity(&self) -> usize;

    /// Number of slots currently available for lending.
    fn free_count(&self) -> usize;

    /// Lend out a free slot, or `None` when every slot is in use.
    fn acquire(&mut self) -> Option<SlotIndex>;

    /// Return a previously acquired slot.
    ///
    /// Returns an error for handles this storage never issued or slots
    /// that are already free.
    fn release(&mut self, slot: SlotIndex) -> Result<(), StorageError>;
}
