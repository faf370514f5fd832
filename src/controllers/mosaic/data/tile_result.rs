use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// One finished pass of one worker. Ownership moves to the assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct TileResult {
    pub worker_index: usize,
    pub origin: Point,
    pub pixel_buffer: PixelBuffer,
    pub view_version: u64,
    pub render_duration: Duration,
}
