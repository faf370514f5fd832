use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// Where the assembled mosaic ends up. Only the frame assembler writes to it.
pub trait DisplaySurface {
    fn size(&self) -> ScreenSize;

    /// Copies `tile` with its top-left corner at `origin`, clipping anything
    /// that falls outside the surface.
    fn blit(&mut self, origin: Point, tile: &PixelBuffer);
}
