//! The fixed-capacity CPU slot pool.

use tilestore_core::{
    Component, FreeList, SlotIndex, StorageError, StorageInstanceId, TileLayout, TileStorage,
};

use crate::slot::Slot;

/// Parameters and slots of an initialized pool.
struct PoolInner<T> {
    layout: TileLayout,
    /// Every slot the pool will ever own, indexed by `SlotIndex`.
    slots: Vec<Slot<T>>,
    /// Handle bookkeeping; the slots themselves never leave `slots`.
    free: FreeList,
}

/// Initialization state. The `Uninitialized → Initialized` transition
/// happens exactly once; there is no way back.
enum PoolState<T> {
    Uninitialized,
    Initialized(PoolInner<T>),
}

/// A fixed-capacity pool of equally-sized host-memory tile buffers.
///
/// All `capacity` buffers are allocated at initialization, each with
/// `tile_size² × channels` elements of type `T`, and registered as free.
/// Capacity is immutable afterwards: the pool lends and takes back slot
/// handles but never allocates again.
///
/// The pool does not decide which tile occupies which slot or when a slot
/// is reclaimed — that policy belongs to the surrounding cache. It also
/// provides no internal locking: concurrent use of slot contents is
/// already serialised by the `&mut self` borrows on [`SlotPool::acquire`],
/// [`SlotPool::release`], and [`SlotPool::slot_mut`].
pub struct SlotPool<T> {
    id: StorageInstanceId,
    state: PoolState<T>,
}

impl<T: Component> SlotPool<T> {
    /// Create an initialized pool: eagerly allocates `capacity` buffers of
    /// `layout.element_count()` elements each.
    ///
    /// `capacity == 0` succeeds without allocating. On allocation failure
    /// the error is returned and every already-built buffer is released
    /// during unwind.
    pub fn new(layout: TileLayout, capacity: usize) -> Result<Self, StorageError> {
        let mut pool = Self::empty();
        pool.init(layout, capacity)?;
        Ok(pool)
    }

    /// Create an uninitialized pool.
    ///
    /// None of the capacity invariants hold until [`SlotPool::init`] runs.
    /// This path exists for specialized pool variants that perform their
    /// own resource setup around the common bookkeeping.
    pub fn empty() -> Self {
        Self {
            id: StorageInstanceId::next(),
            state: PoolState::Uninitialized,
        }
    }

    /// Run the one-shot initialization: store the parameters, allocate
    /// every slot, and register each with the free-list.
    ///
    /// Returns [`StorageError::AlreadyInitialized`] if the pool was already
    /// initialized (through either path); the existing slots are untouched
    /// in that case — nothing leaks and nothing is freed twice.
    pub fn init(&mut self, layout: TileLayout, capacity: usize) -> Result<(), StorageError> {
        if matches!(self.state, PoolState::Initialized(_)) {
            return Err(StorageError::AlreadyInitialized);
        }

        let element_count = layout.element_count();
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| StorageError::AllocationFailed {
                requested_bytes: capacity * std::mem::size_of::<Slot<T>>(),
            })?;
        let mut free = FreeList::with_capacity(capacity);
        for i in 0..capacity {
            slots.push(Slot::new(self.id, element_count)?);
            free.register(SlotIndex(i as u32));
        }

        self.state = PoolState::Initialized(PoolInner {
            layout,
            slots,
            free,
        });
        Ok(())
    }
}

impl<T> SlotPool<T> {
    /// Whether initialization has run.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, PoolState::Initialized(_))
    }

    /// Unique instance ID of this pool; recorded in every slot it owns.
    pub fn instance_id(&self) -> StorageInstanceId {
        self.id
    }

    /// Edge length of one square tile, in pixels.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn tile_size(&self) -> u32 {
        self.inner().layout.tile_size()
    }

    /// Components per pixel. Immutable for the pool's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn channels(&self) -> u32 {
        self.inner().layout.channels()
    }

    /// The layout the pool was initialized with.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn layout(&self) -> TileLayout {
        self.inner().layout
    }

    /// Total number of slots. Fixed for the pool's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn capacity(&self) -> usize {
        self.inner().slots.len()
    }

    /// Element count of every slot: `tile_size² × channels`.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn slot_size(&self) -> usize {
        self.inner().layout.element_count()
    }

    /// Number of slots currently available for lending.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn free_count(&self) -> usize {
        self.inner().free.free_count()
    }

    /// Number of slots currently lent out.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn lent_count(&self) -> usize {
        self.inner().free.lent_count()
    }

    /// Total buffer memory owned by the pool, in bytes.
    ///
    /// Saturates at `usize::MAX` rather than wrapping for layouts whose
    /// byte size exceeds the address space.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn memory_bytes(&self) -> usize {
        let inner = self.inner();
        inner
            .slots
            .len()
            .saturating_mul(inner.layout.tile_bytes::<T>())
    }

    /// Lend out a free slot handle, or `None` when every slot is in use.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn acquire(&mut self) -> Option<SlotIndex> {
        self.inner_mut().free.acquire()
    }

    /// Return a previously acquired slot handle.
    ///
    /// Misuse is reported, never absorbed: handles the pool never issued
    /// yield [`StorageError::UnknownSlot`], double releases
    /// [`StorageError::NotLent`].
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn release(&mut self, slot: SlotIndex) -> Result<(), StorageError> {
        self.inner_mut().free.release(slot)
    }

    /// Read access to a slot's buffer, or `None` for an out-of-range handle.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn slot(&self, slot: SlotIndex) -> Option<&Slot<T>> {
        self.inner().slots.get(slot.0 as usize)
    }

    /// Write access to a slot's buffer, or `None` for an out-of-range handle.
    ///
    /// # Panics
    ///
    /// Panics if the pool is not initialized.
    pub fn slot_mut(&mut self, slot: SlotIndex) -> Option<&mut Slot<T>> {
        self.inner_mut().slots.get_mut(slot.0 as usize)
    }

    fn inner(&self) -> &PoolInner<T> {
        match &self.state {
            PoolState::Initialized(inner) => inner,
            PoolState::Uninitialized => panic!("slot pool used before initialization"),
        }
    }

    fn inner_mut(&mut self) -> &mut PoolInner<T> {
        match &mut self.state {
            PoolState::Initialized(inner) => inner,
            PoolState::Uninitialized => panic!("slot pool used before initialization"),
        }
    }
}

impl<T: Component> TileStorage for SlotPool<T> {
    fn tile_size(&self) -> u32 {
        SlotPool::tile_size(self)
    }

    fn capacity(&self) -> usize {
        SlotPool::capacity(self)
    }

    fn free_count(&self) -> usize {
        SlotPool::free_count(self)
    }

    fn acquire(&mut self) -> Option<SlotIndex> {
        SlotPool::acquire(self)
    }

    fn release(&mut self, slot: SlotIndex) -> Result<(), StorageError> {
        SlotPool::release(self, slot)
    }
}
