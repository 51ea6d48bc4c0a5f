//! Strongly-typed identifiers for slots and storage instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one slot within a storage instance.
///
/// Slots are allocated at storage initialization and assigned sequential
/// indices. `SlotIndex(n)` is the n-th slot of its pool; a handle is only
/// meaningful to the pool that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub u32);

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`StorageInstanceId`] allocation.
static STORAGE_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a storage object.
///
/// Allocated from a monotonic atomic counter via [`StorageInstanceId::next`].
/// Two distinct storage instances always have different IDs, even when
/// constructed with identical parameters. Each slot records its owning
/// pool's instance ID, which stands in for a back-reference to the owner
/// without creating a reference cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageInstanceId(u64);

impl StorageInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(STORAGE_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StorageInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
