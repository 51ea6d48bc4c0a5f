//! Core types and bookkeeping for the tilestore workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the slot handle and storage-instance IDs, the tile layout arithmetic,
//! the error types, the free-list bookkeeping shared by every storage
//! backend, and the [`TileStorage`] trait that backends implement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod component;
pub mod error;
pub mod free_list;
pub mod id;
pub mod layout;
pub mod storage;

pub use component::Component;
pub use error::StorageError;
pub use free_list::FreeList;
pub use id::{SlotIndex, StorageInstanceId};
pub use layout::TileLayout;
pub use storage::TileStorage;
