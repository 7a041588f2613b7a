//! Viewport over the tile map.
//!
//! Canonical coordinate space:
//! - Pixels, origin top-left, +X right, +Y down.
//! - Offsets are clamped so the viewport never leaves the map.

mod viewport;

pub use viewport::Viewport;
