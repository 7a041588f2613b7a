use crate::paint::Color;

/// Opaque tile-set reference data.
///
/// The engine passes tile sets through to layers unmodified; only layer
/// implementations interpret their contents (atlas lookup, animation frames).
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    /// First global tile id covered by this set.
    pub first_gid: u32,
    pub name: String,
    /// Backing image source, if file based.
    pub image: Option<String>,
}

/// Immutable tile-map definition.
///
/// Built once by the host's map loader, then shared into the engine via
/// `Rc<MapData>` for the lifetime of the driver. All dimensions are fixed
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MapData {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
    background_color: Color,
    tile_sets: Vec<TileSet>,
}

impl MapData {
    /// Creates a map definition.
    ///
    /// # Panics
    /// Panics if any dimension is zero; a degenerate map is a loader bug,
    /// not a runtime condition.
    pub fn new(
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
        background_color: Color,
        tile_sets: Vec<TileSet>,
    ) -> Self {
        assert!(width > 0 && height > 0, "map has zero tile extent");
        assert!(tile_width > 0 && tile_height > 0, "map has zero tile size");

        Self {
            width,
            height,
            tile_width,
            tile_height,
            background_color,
            tile_sets,
        }
    }

    /// Map width in tiles.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in tiles.
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

    #[inline]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Tile sets in map-file order.
    #[inline]
    pub fn tile_sets(&self) -> &[TileSet] {
        &self.tile_sets
    }
}
