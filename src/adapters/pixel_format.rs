//! Pixel format helpers shared by the presentation adapters.

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;

/// Copies `src` into an RGBA frame of `dst_width × dst_height` with its
/// top-left corner at `origin`, clipping whatever falls outside the frame.
///
/// # Panics
/// Panics if `dst` is not exactly `dst_width * dst_height * 4` bytes long.
pub fn blit_rgba(dst: &mut [u8], dst_width: u32, dst_height: u32, origin: Point, src: &PixelBuffer) {
    let expected_dst_len = dst_width as usize * dst_height as usize * BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {} for {}x{}",
        dst.len(),
        expected_dst_len,
        dst_width,
        dst_height
    );

    let left = i64::from(origin.x).max(0);
    let top = i64::from(origin.y).max(0);
    let right = (i64::from(origin.x) + i64::from(src.width())).min(i64::from(dst_width));
    let bottom = (i64::from(origin.y) + i64::from(src.height())).min(i64::from(dst_height));

    if left >= right || top >= bottom {
        return;
    }

    let copy_bytes = (right - left) as usize * BYTES_PER_PIXEL;
    let src_stride = src.width() as usize * BYTES_PER_PIXEL;
    let dst_stride = dst_width as usize * BYTES_PER_PIXEL;
    let src_x = (left - i64::from(origin.x)) as usize * BYTES_PER_PIXEL;

    for y in top..bottom {
        let src_row = (y - i64::from(origin.y)) as usize;
        let src_start = src_row * src_stride + src_x;
        let dst_start = y as usize * dst_stride + left as usize * BYTES_PER_PIXEL;

        dst[dst_start..dst_start + copy_bytes]
            .copy_from_slice(&src.data()[src_start..src_start + copy_bytes]);
    }
}

/// Drops the alpha channel, producing packed RGB for file formats that
/// have no alpha.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    assert!(
        src.len() % BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );

    src.chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect()
}
