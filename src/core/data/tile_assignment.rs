use crate::core::data::point::Point;

/// Fixed screen rectangle owned by one worker for its whole lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TileAssignment {
    pub worker_index: usize,
    pub grid_column: u32,
    pub grid_row: u32,
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
}

impl TileAssignment {
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x as i32, self.origin_y as i32)
    }

    /// One past the right-most column covered by this tile.
    #[must_use]
    pub fn right(&self) -> u32 {
        self.origin_x + self.width
    }

    /// One past the bottom-most row covered by this tile.
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.origin_y + self.height
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.origin_x && x < self.right() && y >= self.origin_y && y < self.bottom()
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.origin_x < other.right()
            && other.origin_x < self.right()
            && self.origin_y < other.bottom()
            && other.origin_y < self.bottom()
    }
}
