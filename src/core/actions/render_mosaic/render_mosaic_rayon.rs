use rayon::prelude::*;

use crate::adapters::pixel_format::blit_rgba;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::actions::render_tile::render_tile::{RenderTileError, render_tile};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::rgba::Rgba;
use crate::core::data::tile_grid::TileGrid;
use crate::core::data::view_state::ViewState;

/// Renders every tile of the grid once, in parallel on rayon's pool.
///
/// Tiles come back in worker order. This is the one-shot counterpart of the
/// streaming worker pool and produces identical pixels for the same view.
pub fn render_mosaic_tiles<M, C>(
    grid: &TileGrid,
    view: &ViewState,
    colour_map: &M,
    cancel: &C,
) -> Result<Vec<PixelBuffer>, RenderTileError>
where
    M: ColourMap + ?Sized,
    C: CancelToken,
{
    let screen = grid.screen();

    grid.tiles()
        .par_iter()
        .map(|tile| render_tile(tile, screen, view, colour_map, cancel))
        .collect()
}

/// Renders the whole screen into a single buffer. The truncated remainder
/// on the right and bottom keeps `background`.
pub fn render_mosaic_frame<M, C>(
    grid: &TileGrid,
    view: &ViewState,
    colour_map: &M,
    background: Rgba,
    cancel: &C,
) -> Result<PixelBuffer, RenderTileError>
where
    M: ColourMap + ?Sized,
    C: CancelToken,
{
    let screen = grid.screen();
    let tiles = render_mosaic_tiles(grid, view, colour_map, cancel)?;
    let mut frame = PixelBuffer::filled(screen.width, screen.height, background)?;

    for (assignment, tile) in grid.tiles().iter().zip(&tiles) {
        blit_rgba(frame.data_mut(), screen.width, screen.height, assignment.origin(), tile);
    }

    Ok(frame)
}
