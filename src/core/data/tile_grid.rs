use crate::core::data::screen_size::ScreenSize;
use crate::core::data::tile_assignment::TileAssignment;

/// Result of partitioning the screen: `rows × columns` equally sized tiles,
/// indexed row-major by worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    pub(crate) columns: u32,
    pub(crate) rows: u32,
    pub(crate) tile_width: u32,
    pub(crate) tile_height: u32,
    pub(crate) screen: ScreenSize,
    pub(crate) tiles: Vec<TileAssignment>,
}

impl TileGrid {
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    #[must_use]
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn tiles(&self) -> &[TileAssignment] {
        &self.tiles
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.tiles.len()
    }

    /// The area actually rendered; trailing columns and rows lost to integer
    /// division are outside it.
    #[must_use]
    pub fn covered(&self) -> ScreenSize {
        ScreenSize::new(self.columns * self.tile_width, self.rows * self.tile_height)
    }

    /// Pixels dropped on the right and bottom edges.
    #[must_use]
    pub fn uncovered(&self) -> (u32, u32) {
        let covered = self.covered();
        (
            self.screen.width - covered.width,
            self.screen.height - covered.height,
        )
    }

    #[must_use]
    pub fn tile_at(&self, x: u32, y: u32) -> Option<&TileAssignment> {
        if x >= self.columns * self.tile_width || y >= self.rows * self.tile_height {
            return None;
        }

        let index = (y / self.tile_height) * self.columns + x / self.tile_width;
        self.tiles.get(index as usize)
    }
}
