//! Error types for tile storage operations.

use std::error::Error;
use std::fmt;

use crate::id::SlotIndex;

/// Errors that can occur during storage construction and slot bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A slot buffer could not be allocated during pool initialization.
    ///
    /// Fatal at this layer: there is no partial-pool recovery. Slots that
    /// were already fully constructed are released during unwind.
    AllocationFailed {
        /// Number of bytes the failed buffer would have occupied.
        requested_bytes: usize,
    },
    /// A layout dimension was zero.
    InvalidLayout {
        /// The rejected tile edge length.
        tile_size: u32,
        /// The rejected per-pixel component count.
        channels: u32,
    },
    /// The layout's element count does not fit in `usize` on this target.
    OversizedLayout {
        /// The rejected tile edge length.
        tile_size: u32,
        /// The rejected per-pixel component count.
        channels: u32,
    },
    /// Explicit initialization was attempted on a pool that already ran it
    /// (or was constructed through the eager path).
    AlreadyInitialized,
    /// A handle outside the pool's slot range was returned to the free-list.
    UnknownSlot {
        /// The unrecognised handle.
        slot: SlotIndex,
    },
    /// A slot was returned while it was already in the free-list.
    NotLent {
        /// The handle that was released twice.
        slot: SlotIndex,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "slot buffer allocation failed: {requested_bytes} bytes")
            }
            Self::InvalidLayout {
                tile_size,
                channels,
            } => {
                write!(
                    f,
                    "invalid tile layout: tile_size {tile_size}, channels {channels} (both must be positive)"
                )
            }
            Self::OversizedLayout {
                tile_size,
                channels,
            } => {
                write!(
                    f,
                    "oversized tile layout: tile_size {tile_size} x channels {channels} exceeds the addressable element count"
                )
            }
            Self::AlreadyInitialized => write!(f, "storage is already initialized"),
            Self::UnknownSlot { slot } => write!(f, "slot {slot} does not belong to this storage"),
            Self::NotLent { slot } => write!(f, "slot {slot} is already free"),
        }
    }
}

impl Error for StorageError {}
