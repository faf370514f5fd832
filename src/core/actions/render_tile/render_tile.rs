use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::tile_assignment::TileAssignment;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::coords::tile_pixel_to_complex;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RenderTileError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("tile buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Renders one full tile for a single view snapshot into a fresh buffer.
///
/// The cancellation token is polled at the start of every row, so a shutdown
/// waits for at most one row of work.
pub fn render_tile<M, C>(
    tile: &TileAssignment,
    screen: ScreenSize,
    view: &ViewState,
    colour_map: &M,
    cancel: &C,
) -> Result<PixelBuffer, RenderTileError>
where
    M: ColourMap + ?Sized,
    C: CancelToken + ?Sized,
{
    if tile.width == 0 || tile.height == 0 {
        return Err(PixelBufferError::InvalidSize {
            width: tile.width,
            height: tile.height,
        }
        .into());
    }

    let row_bytes = tile.width as usize * BYTES_PER_PIXEL;
    let mut data = vec![0; row_bytes * tile.height as usize];

    for (local_y, row) in data.chunks_exact_mut(row_bytes).enumerate() {
        if cancel.is_cancelled() {
            return Err(RenderTileError::Cancelled(Cancelled));
        }

        for (local_x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let c = tile_pixel_to_complex(local_x as u32, local_y as u32, tile, screen, view);
            let colour = colour_map.map(escape_time(c, view.iteration_cap));
            pixel.copy_from_slice(&colour.to_bytes());
        }
    }

    Ok(PixelBuffer::from_data(tile.width, tile.height, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::partition_tiles::partition_tiles::partition_tiles;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::rgba::Rgba;
    use crate::core::fractals::mandelbrot::palette::WrappingPalette;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct IterationEcho;

    impl ColourMap for IterationEcho {
        fn map(&self, iterations: u32) -> Rgba {
            Rgba::opaque(iterations as u8, 0, 0)
        }

        fn display_name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_buffer_matches_tile_dimensions() {
        let screen = ScreenSize::new(120, 80);
        let grid = partition_tiles(6, screen).unwrap();
        let tile = &grid.tiles()[4];

        let buffer = render_tile(tile, screen, &ViewState::default(), &WrappingPalette::default(), &NeverCancel)
            .unwrap();

        assert_eq!(buffer.width(), tile.width);
        assert_eq!(buffer.height(), tile.height);
        assert_eq!(buffer.data().len(), (tile.width * tile.height) as usize * BYTES_PER_PIXEL);
    }

    #[test]
    fn test_each_pixel_is_evaluated_at_its_mapped_coordinate() {
        let screen = ScreenSize::new(60, 40);
        let grid = partition_tiles(4, screen).unwrap();
        let view = ViewState {
            position: Complex::new(-0.75, 0.1),
            zoom: 1.2,
            iteration_cap: 200,
            ..ViewState::default()
        };

        for tile in grid.tiles() {
            let buffer = render_tile(tile, screen, &view, &IterationEcho, &NeverCancel).unwrap();

            for local_y in 0..tile.height {
                for local_x in 0..tile.width {
                    let c = tile_pixel_to_complex(local_x, local_y, tile, screen, &view);
                    let expected = escape_time(c, view.iteration_cap) as u8;
                    let pixel = buffer
                        .pixel(Point::new(local_x as i32, local_y as i32))
                        .unwrap();
                    assert_eq!(pixel.r, expected);
                }
            }
        }
    }

    #[test]
    fn test_screen_centre_pixel_of_interior_view_reaches_cap() {
        let screen = ScreenSize::new(1800, 1000);
        let grid = partition_tiles(24, screen).unwrap();
        let tile = grid.tile_at(900, 500).unwrap();
        let view = ViewState {
            position: Complex::new(-0.5, 0.0),
            zoom: 1.5,
            iteration_cap: 20,
            ..ViewState::default()
        };

        let buffer = render_tile(tile, screen, &view, &IterationEcho, &NeverCancel).unwrap();

        assert_eq!(buffer.pixel(Point::new(0, 0)).unwrap().r, 20);
    }

    #[test]
    fn test_cancelled_before_start_returns_cancelled() {
        let screen = ScreenSize::new(40, 40);
        let grid = partition_tiles(1, screen).unwrap();
        let cancel = || true;

        let result = render_tile(&grid.tiles()[0], screen, &ViewState::default(), &IterationEcho, &cancel);

        assert_eq!(result, Err(RenderTileError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_cancellation_polled_once_per_row() {
        let screen = ScreenSize::new(30, 17);
        let grid = partition_tiles(1, screen).unwrap();
        let polls = AtomicUsize::new(0);
        let cancel = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = render_tile(&grid.tiles()[0], screen, &ViewState::default(), &IterationEcho, &cancel);

        assert!(result.is_ok());
        assert_eq!(polls.load(Ordering::Relaxed), 17);
    }

    #[test]
    fn test_cancellation_mid_tile_stops_early() {
        let screen = ScreenSize::new(30, 17);
        let grid = partition_tiles(1, screen).unwrap();
        let polls = AtomicUsize::new(0);
        let cancel = || polls.fetch_add(1, Ordering::Relaxed) >= 3;

        let result = render_tile(&grid.tiles()[0], screen, &ViewState::default(), &IterationEcho, &cancel);

        assert_eq!(result, Err(RenderTileError::Cancelled(Cancelled)));
        assert_eq!(polls.load(Ordering::Relaxed), 4);
    }
}
