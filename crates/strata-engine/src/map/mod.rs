//! Static map definition.
//!
//! `MapData` is produced by the host's map loader and shared into the engine
//! read-only. The engine never interprets tile sets; it only forwards them to
//! layers.

mod data;

pub use data::{MapData, TileSet};
