//! CPU-resident slot pool for tile data.
//!
//! [`SlotPool`] owns a fixed set of equally-sized, host-memory buffers
//! ([`Slot`]s) sized from a [`TileLayout`](tilestore_core::TileLayout).
//! All buffers are allocated eagerly at initialization; the pool never
//! grows, shrinks, or reallocates. Lending and returning goes through
//! the free-list bookkeeping in `tilestore-core`.
//!
//! # Lifecycle
//!
//! ```text
//! SlotPool::empty()            SlotPool::new(layout, capacity)
//!        │                                  │
//!        └── init(layout, capacity) ────────┤
//!                                           ▼
//!                                      Initialized
//!                        (terminal: capacity slots exist until drop)
//! ```
//!
//! The deferred `empty()` + `init()` path exists for specialized pool
//! variants (e.g. device-resident storage) that perform their own
//! resource setup around the common bookkeeping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pool;
pub mod slot;

pub use pool::SlotPool;
pub use slot::Slot;
