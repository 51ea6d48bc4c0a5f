//! Tilestore: fixed-capacity typed slot storage for streaming tile pipelines.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the tilestore sub-crates. For most users, adding `tilestore` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tilestore::prelude::*;
//!
//! // An RGBA byte-tile pool: 8 slots of 32×32 pixels × 4 channels.
//! let layout = TileLayout::new(32, 4).unwrap();
//! let mut pool: SlotPool<u8> = SlotPool::new(layout, 8).unwrap();
//! assert_eq!(pool.slot_size(), 4096);
//! assert_eq!(pool.channels(), 4);
//!
//! // Borrow a slot, write a tile into it, hand it back.
//! let handle = pool.acquire().unwrap();
//! pool.slot_mut(handle).unwrap().as_mut_slice().fill(0xFF);
//! pool.release(handle).unwrap();
//! assert_eq!(pool.free_count(), 8);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tilestore-core` | IDs, layout arithmetic, errors, free-list, the [`types::TileStorage`] trait |
//! | [`cpu`] | `tilestore-cpu` | The host-memory [`cpu::SlotPool`] and [`cpu::Slot`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and bookkeeping (`tilestore-core`).
///
/// Contains [`types::TileLayout`], [`types::StorageError`], the slot
/// handle types, the [`types::FreeList`] bookkeeping, and the
/// [`types::TileStorage`] backend trait.
pub use tilestore_core as types;

/// CPU-resident slot pool (`tilestore-cpu`).
///
/// [`cpu::SlotPool`] owns a fixed inventory of equally-sized host buffers
/// and lends them out through slot handles.
pub use tilestore_cpu as cpu;

/// Common imports for typical tilestore usage.
///
/// ```rust
/// use tilestore::prelude::*;
/// ```
pub mod prelude {
    // Core types and the backend trait
    pub use tilestore_core::{
        Component, SlotIndex, StorageInstanceId, TileLayout, TileStorage,
    };

    // Errors
    pub use tilestore_core::StorageError;

    // CPU pool
    pub use tilestore_cpu::{Slot, SlotPool};
}
