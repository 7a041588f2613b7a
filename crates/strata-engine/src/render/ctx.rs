use crate::map::{MapData, TileSet};
use crate::view::Viewport;

use super::BatchRenderer;

/// Layer-facing capability for one render cycle.
///
/// Combines the map and viewport geometry, the cycle's frame time, and the
/// batch renderer. Everything except the batch is read-only: layers cannot
/// reach viewport moves or pipeline membership through this type.
pub struct RenderContext<'a, B: BatchRenderer> {
    map: &'a MapData,
    viewport: &'a Viewport,
    time_ms: u32,
    batch: &'a mut B,
}

impl<'a, B: BatchRenderer> RenderContext<'a, B> {
    pub(crate) fn new(
        map: &'a MapData,
        viewport: &'a Viewport,
        time_ms: u32,
        batch: &'a mut B,
    ) -> Self {
        Self {
            map,
            viewport,
            time_ms,
            batch,
        }
    }

    /// Viewport width in tiles.
    #[inline]
    pub fn width(&self) -> u32 {
        self.viewport.width()
    }

    /// Viewport height in tiles.
    #[inline]
    pub fn height(&self) -> u32 {
        self.viewport.height()
    }

    /// Map width in tiles.
    #[inline]
    pub fn map_width(&self) -> u32 {
        self.map.width()
    }

    /// Map height in tiles.
    #[inline]
    pub fn map_height(&self) -> u32 {
        self.map.height()
    }

    /// Tile width in pixels.
    #[inline]
    pub fn tile_width(&self) -> u32 {
        self.map.tile_width()
    }

    /// Tile height in pixels.
    #[inline]
    pub fn tile_height(&self) -> u32 {
        self.map.tile_height()
    }

    /// Viewport width in pixels.
    #[inline]
    pub fn pixel_width(&self) -> u32 {
        self.viewport.pixel_width()
    }

    /// Viewport height in pixels.
    #[inline]
    pub fn pixel_height(&self) -> u32 {
        self.viewport.pixel_height()
    }

    /// Horizontal scroll offset in pixels.
    #[inline]
    pub fn offset_x(&self) -> i32 {
        self.viewport.offset_x()
    }

    /// Vertical scroll offset in pixels.
    #[inline]
    pub fn offset_y(&self) -> i32 {
        self.viewport.offset_y()
    }

    /// Tile sets in map-file order, passed through uninterpreted.
    #[inline]
    pub fn tile_sets(&self) -> &[TileSet] {
        self.map.tile_sets()
    }

    /// Frame time for this cycle, in milliseconds since the clock origin.
    ///
    /// Ticked once per cycle; every layer observes the same value.
    #[inline]
    pub fn current_time(&self) -> u32 {
        self.time_ms
    }

    /// The batch renderer, for issuing draws.
    #[inline]
    pub fn batch(&mut self) -> &mut B {
        self.batch
    }
}
