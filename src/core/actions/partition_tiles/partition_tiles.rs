use crate::core::data::screen_size::ScreenSize;
use crate::core::data::tile_assignment::TileAssignment;
use crate::core::data::tile_grid::TileGrid;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("{columns}x{rows} grid does not fit a {width}x{height} screen")]
    GridTooFine {
        columns: u32,
        rows: u32,
        width: u32,
        height: u32,
    },
}

fn divisors(n: u32) -> Vec<u32> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = 1;

    while u64::from(i) * u64::from(i) <= u64::from(n) {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }

    small.extend(large.into_iter().rev());
    small
}

/// Picks `(rows, columns)` from the middle of the sorted divisor list so the
/// grid is as close to square as the worker count allows, with the smaller
/// factor as rows.
pub fn grid_shape(worker_count: u32) -> Result<(u32, u32), PartitionError> {
    if worker_count == 0 {
        return Err(PartitionError::NoWorkers);
    }

    let factors = divisors(worker_count);
    let middle = factors.len() / 2;

    if factors.len() % 2 == 0 {
        Ok((factors[middle - 1], factors[middle]))
    } else {
        Ok((factors[middle], factors[middle]))
    }
}

/// Splits the screen into one fixed tile per worker.
///
/// Tile dimensions use integer division; pixels left over on the right and
/// bottom edges are not assigned to any worker.
pub fn partition_tiles(worker_count: u32, screen: ScreenSize) -> Result<TileGrid, PartitionError> {
    let (rows, columns) = grid_shape(worker_count)?;
    let tile_width = screen.width / columns;
    let tile_height = screen.height / rows;

    if tile_width == 0 || tile_height == 0 {
        return Err(PartitionError::GridTooFine {
            columns,
            rows,
            width: screen.width,
            height: screen.height,
        });
    }

    let tiles = (0..worker_count)
        .map(|worker| {
            let grid_column = worker % columns;
            let grid_row = worker / columns;

            TileAssignment {
                worker_index: worker as usize,
                grid_column,
                grid_row,
                origin_x: grid_column * tile_width,
                origin_y: grid_row * tile_height,
                width: tile_width,
                height: tile_height,
            }
        })
        .collect();

    Ok(TileGrid {
        columns,
        rows,
        tile_width,
        tile_height,
        screen,
        tiles,
    })
}
