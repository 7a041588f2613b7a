use crate::map::MapData;

/// Scrollable pixel-space window into the tile map.
///
/// Tile dimensions are fixed at construction, and so are the derived pixel
/// dimensions; only the scroll offsets mutate. Offsets always satisfy
/// `0 <= offset_x <= (map_width - width) * tile_width` (same for y), so a
/// layer can index tiles from them without bounds checks of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,

    pixel_width: u32,
    pixel_height: u32,

    max_offset_x: i32,
    max_offset_y: i32,

    offset_x: i32,
    offset_y: i32,
}

impl Viewport {
    /// Creates a viewport of `width` x `height` tiles over `map`, at offset
    /// (0, 0).
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(map: &MapData, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "viewport has zero tile extent");

        let tile_width = map.tile_width();
        let tile_height = map.tile_height();

        // Saturating: a map no larger than the viewport collapses the valid
        // offset range to exactly {0} instead of inverting it.
        let max_offset_x = (map.width().saturating_sub(width) * tile_width) as i32;
        let max_offset_y = (map.height().saturating_sub(height) * tile_height) as i32;

        Self {
            width,
            height,
            tile_width,
            tile_height,
            pixel_width: width * tile_width,
            pixel_height: height * tile_height,
            max_offset_x,
            max_offset_y,
            offset_x: 0,
            offset_y: 0,
        }
    }

    /// Moves the viewport to pixel position (x, y), clamped to the map.
    ///
    /// Returns whether the clamped result differs from the prior offsets, so
    /// callers can skip invalidation on redundant moves.
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        let new_x = x.max(0).min(self.max_offset_x);
        let new_y = y.max(0).min(self.max_offset_y);

        if new_x == self.offset_x && new_y == self.offset_y {
            return false;
        }

        self.offset_x = new_x;
        self.offset_y = new_y;

        true
    }

    /// Moves the viewport by (dx, dy) pixels, clamped to the map.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        self.move_to(self.offset_x + dx, self.offset_y + dy)
    }

    /// Centers the viewport horizontally on a target's midpoint and anchors
    /// its vertical center just above `target_y`.
    pub fn center(&mut self, target_x: i32, target_width: u32, target_y: i32) -> bool {
        self.move_to(
            target_x + (target_width as i32 - self.pixel_width as i32) / 2,
            target_y - self.pixel_height as i32 / 2,
        )
    }

    /// Viewport width in tiles.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in tiles.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile width in pixels.
    #[inline]
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Tile height in pixels.
    #[inline]
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Viewport width in pixels. Constant after construction.
    #[inline]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Viewport height in pixels. Constant after construction.
    #[inline]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Current horizontal scroll offset in pixels.
    #[inline]
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    /// Current vertical scroll offset in pixels.
    #[inline]
    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }
}
