use crate::core::data::point::Point;
use crate::core::data::rgba::Rgba;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    #[error("buffer of {width}x{height} needs {expected} bytes, got {actual}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Tightly packed RGBA pixels, row-major, origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        Self::filled(width, height, Rgba::default())
    }

    pub fn filled(width: u32, height: u32, colour: Rgba) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let data = colour
            .to_bytes()
            .into_iter()
            .cycle()
            .take(buffer_len(width, height))
            .collect();

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let expected = buffer_len(width, height);

        if expected != data.len() {
            return Err(PixelBufferError::BoundsMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn pixel(&self, pixel: Point) -> Result<Rgba, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Rgba {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
            a: self.data[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Rgba) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if pixel.x < 0
            || pixel.y < 0
            || pixel.x as u32 >= self.width
            || pixel.y as u32 >= self.height
        {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
