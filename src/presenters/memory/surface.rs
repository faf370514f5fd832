use crate::adapters::pixel_format::blit_rgba;
use crate::controllers::mosaic::ports::display_surface::DisplaySurface;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::rgba::Rgba;
use crate::core::data::screen_size::ScreenSize;

/// Off-screen display surface used by the headless front-end and tests.
pub struct MemorySurface {
    buffer: PixelBuffer,
}

impl MemorySurface {
    pub fn new(size: ScreenSize) -> Result<Self, PixelBufferError> {
        Ok(Self {
            buffer: PixelBuffer::filled(size.width, size.height, Rgba::BLACK)?,
        })
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_pixel_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

impl DisplaySurface for MemorySurface {
    fn size(&self) -> ScreenSize {
        ScreenSize::new(self.buffer.width(), self.buffer.height())
    }

    fn blit(&mut self, origin: Point, tile: &PixelBuffer) {
        let (width, height) = (self.buffer.width(), self.buffer.height());
        blit_rgba(self.buffer.data_mut(), width, height, origin, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_opaque_black() {
        let surface = MemorySurface::new(ScreenSize::new(4, 3)).unwrap();

        assert_eq!(surface.size(), ScreenSize::new(4, 3));
        assert_eq!(
            surface.pixel_buffer(),
            &PixelBuffer::filled(4, 3, Rgba::BLACK).unwrap()
        );
    }

    #[test]
    fn test_blit_places_tile_at_origin() {
        let mut surface = MemorySurface::new(ScreenSize::new(4, 3)).unwrap();
        let tile = PixelBuffer::filled(2, 2, Rgba::opaque(10, 20, 30)).unwrap();

        surface.blit(Point::new(1, 1), &tile);
        let buffer = surface.into_pixel_buffer();

        assert_eq!(buffer.pixel(Point::new(0, 0)).unwrap(), Rgba::BLACK);
        assert_eq!(buffer.pixel(Point::new(1, 1)).unwrap(), Rgba::opaque(10, 20, 30));
        assert_eq!(buffer.pixel(Point::new(2, 2)).unwrap(), Rgba::opaque(10, 20, 30));
        assert_eq!(buffer.pixel(Point::new(3, 2)).unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_zero_sized_surface_is_rejected() {
        assert!(MemorySurface::new(ScreenSize::new(0, 3)).is_err());
    }
}
