use crate::core::data::complex::Complex;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::tile_assignment::TileAssignment;
use crate::core::data::view_state::ViewState;

/// Maps a pixel inside `tile` to the complex plane.
///
/// Screen coordinates are taken relative to the (integer) screen centre and
/// scaled so that one tile width or height spans `zoom` units. The screen
/// centre therefore lands exactly on `view.position`.
#[inline]
#[must_use]
pub fn tile_pixel_to_complex(
    local_x: u32,
    local_y: u32,
    tile: &TileAssignment,
    screen: ScreenSize,
    view: &ViewState,
) -> Complex {
    let (half_width, half_height) = screen.half();
    let screen_x = (tile.origin_x + local_x) as i32 - half_width;
    let screen_y = (tile.origin_y + local_y) as i32 - half_height;

    let offset = Complex {
        real: (f64::from(screen_x) / f64::from(tile.width)) * view.zoom,
        imag: (f64::from(screen_y) / f64::from(tile.height)) * view.zoom,
    };

    offset + view.position
}
