//! Tile layout parameters and buffer sizing arithmetic.

use crate::error::StorageError;

/// Dimensions of the square tiles a storage instance holds.
///
/// Validated at construction; both values are immutable after creation.
/// Every slot of a pool built from this layout has exactly
/// [`TileLayout::element_count`] elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLayout {
    /// Edge length of one square tile, in pixels.
    tile_size: u32,
    /// Components per pixel (e.g. 1 for grayscale height data, 4 for RGBA).
    channels: u32,
    /// `tile_size * tile_size * channels`, validated at construction.
    element_count: usize,
}

impl TileLayout {
    /// Create a validated layout.
    ///
    /// Returns [`StorageError::InvalidLayout`] if either dimension is zero,
    /// and [`StorageError::OversizedLayout`] if `tile_size² × channels`
    /// does not fit in `usize` on this target — so
    /// [`TileLayout::element_count`] can never wrap.
    pub fn new(tile_size: u32, channels: u32) -> Result<Self, StorageError> {
        if tile_size == 0 || channels == 0 {
            return Err(StorageError::InvalidLayout {
                tile_size,
                channels,
            });
        }
        let element_count = (tile_size as usize)
            .checked_mul(tile_size as usize)
            .and_then(|pixels| pixels.checked_mul(channels as usize))
            .ok_or(StorageError::OversizedLayout {
                tile_size,
                channels,
            })?;
        Ok(Self {
            tile_size,
            channels,
            element_count,
        })
    }

    /// Edge length of one square tile, in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Components per pixel.
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Number of elements one tile buffer must hold:
    /// `tile_size * tile_size * channels`.
    ///
    /// Infallible: the product was overflow-checked by
    /// [`TileLayout::new`], which rejects layouts it cannot represent.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Size in bytes of one tile buffer with component type `T`.
    ///
    /// Saturates at `usize::MAX` when the byte count exceeds the address
    /// space; such a buffer can never be allocated, and slot allocation
    /// reports [`StorageError::AllocationFailed`] for it.
    pub fn tile_bytes<T>(&self) -> usize {
        self.element_count.saturating_mul(std::mem::size_of::<T>())
    }
}
