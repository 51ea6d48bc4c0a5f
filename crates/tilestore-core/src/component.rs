//! The element-type parameter for tile storage.

/// A scalar type that can back one pixel component of a tile.
///
/// Storage backends are generic over the component representation — a
/// heightfield pool might store `f32`, a color-texture pool `u8`. The
/// allocation logic is identical for every implementor; the bound exists
/// so that buffers can be zero-initialised (`Default`) and handed across
/// threads by the surrounding producer system (`Send + Sync`).
pub trait Component: Copy + Default + Send + Sync + 'static {}

impl Component for u8 {}
impl Component for i8 {}
impl Component for u16 {}
impl Component for i16 {}
impl Component for u32 {}
impl Component for i32 {}
impl Component for f32 {}
impl Component for f64 {}
