use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, bounded, select};
use log::{debug, error, warn};

use crate::controllers::mosaic::data::tile_result::TileResult;
use crate::controllers::mosaic::errors::MosaicError;
use crate::controllers::mosaic::shared_view::ViewReader;
use crate::core::actions::cancellation::{CancelToken, CancellationFlag};
use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::actions::render_tile::render_tile::{RenderTileError, render_tile};
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::tile_assignment::TileAssignment;
use crate::core::data::tile_grid::TileGrid;

struct WorkerContext {
    tile: TileAssignment,
    screen: ScreenSize,
    view: ViewReader,
    colour_map: Arc<dyn ColourMap>,
    cancel: CancellationFlag,
    results: Sender<TileResult>,
    shutdown: Receiver<()>,
}

/// One persistent thread per tile, each rendering its tile over and over for
/// the latest view and handing every finished pass to the assembler.
pub struct TileWorkerPool {
    cancel: CancellationFlag,
    // Never sent on; dropping it wakes every worker blocked in a handoff.
    shutdown_tx: Option<Sender<()>>,
    workers: Vec<(usize, JoinHandle<()>)>,
}

impl TileWorkerPool {
    /// Starts a worker per tile of `grid`. The returned receivers are indexed
    /// by worker and each is a rendezvous channel: a worker blocks until its
    /// result is taken.
    pub fn spawn(
        grid: &TileGrid,
        view: ViewReader,
        colour_map: Arc<dyn ColourMap>,
    ) -> Result<(Self, Vec<Receiver<TileResult>>), MosaicError> {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);

        let mut pool = Self {
            cancel: CancellationFlag::new(),
            shutdown_tx: Some(shutdown_tx),
            workers: Vec::with_capacity(grid.worker_count()),
        };
        let mut receivers = Vec::with_capacity(grid.worker_count());

        for tile in grid.tiles() {
            let (results_tx, results_rx) = bounded(0);
            let context = WorkerContext {
                tile: *tile,
                screen: grid.screen(),
                view: view.clone(),
                colour_map: Arc::clone(&colour_map),
                cancel: pool.cancel.clone(),
                results: results_tx,
                shutdown: shutdown_rx.clone(),
            };

            let handle = thread::Builder::new()
                .name(format!("tile-worker-{}", tile.worker_index))
                .spawn(move || worker_loop(context));

            match handle {
                Ok(handle) => {
                    pool.workers.push((tile.worker_index, handle));
                    receivers.push(results_rx);
                }
                Err(source) => {
                    pool.shutdown();
                    return Err(MosaicError::Spawn {
                        worker_index: tile.worker_index,
                        source,
                    });
                }
            }
        }

        Ok((pool, receivers))
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shutdown_tx.is_none()
    }

    /// Stops every worker and waits for them to exit. Safe to call twice.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        self.shutdown_tx.take();

        for (worker_index, handle) in self.workers.drain(..) {
            if handle.join().is_err() {
                warn!("tile worker {} panicked", worker_index);
            }
        }
    }
}

impl Drop for TileWorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(context: WorkerContext) {
    let worker_index = context.tile.worker_index;

    loop {
        if context.cancel.is_cancelled() {
            break;
        }

        let snapshot = context.view.snapshot();
        let start = Instant::now();

        let pixel_buffer = match render_tile(
            &context.tile,
            context.screen,
            &snapshot.state,
            context.colour_map.as_ref(),
            &context.cancel,
        ) {
            Ok(pixel_buffer) => pixel_buffer,
            Err(RenderTileError::Cancelled(_)) => break,
            Err(err) => {
                error!("tile worker {} cannot render: {}", worker_index, err);
                break;
            }
        };

        let result = TileResult {
            worker_index,
            origin: context.tile.origin(),
            pixel_buffer,
            view_version: snapshot.version,
            render_duration: start.elapsed(),
        };

        select! {
            send(context.results, result) -> sent => {
                if sent.is_err() {
                    debug!("tile worker {} lost its consumer", worker_index);
                    break;
                }
            }
            recv(context.shutdown) -> _ => break,
        }
    }

    debug!("tile worker {} exiting", worker_index);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::mosaic::shared_view::view_channel;
    use crate::core::actions::partition_tiles::partition_tiles::partition_tiles;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::view_state::ViewState;
    use crate::core::fractals::mandelbrot::palette::WrappingPalette;
    use std::time::Duration;

    const RECV_TIMEOUT: Duration = Duration::from_secs(10);

    fn small_grid(workers: u32) -> TileGrid {
        partition_tiles(workers, ScreenSize::new(48, 24)).unwrap()
    }

    #[test_log::test]
    fn test_every_worker_delivers_its_own_tile() {
        let grid = small_grid(6);
        let (_publisher, reader) = view_channel(ViewState::default());
        let (mut pool, receivers) =
            TileWorkerPool::spawn(&grid, reader, Arc::new(WrappingPalette::default())).unwrap();

        assert_eq!(pool.worker_count(), 6);
        assert_eq!(receivers.len(), 6);

        for (tile, receiver) in grid.tiles().iter().zip(&receivers) {
            let result = receiver.recv_timeout(RECV_TIMEOUT).unwrap();
            let expected = render_tile(
                tile,
                grid.screen(),
                &ViewState::default(),
                &WrappingPalette::default(),
                &NeverCancel,
            )
            .unwrap();

            assert_eq!(result.worker_index, tile.worker_index);
            assert_eq!(result.origin, tile.origin());
            assert_eq!(result.view_version, 0);
            assert_eq!(result.pixel_buffer, expected);
        }

        pool.shutdown();
        assert!(pool.is_shut_down());
    }

    #[test_log::test]
    fn test_workers_pick_up_published_view() {
        let grid = small_grid(2);
        let (publisher, reader) = view_channel(ViewState::default());
        let (_pool, receivers) =
            TileWorkerPool::spawn(&grid, reader, Arc::new(WrappingPalette::default())).unwrap();

        let mut next = ViewState::default();
        next.zoom = 0.1;
        let version = publisher.publish(next);

        // At most one pass started before the publish is still in flight
        // per handoff, so a few receives are enough to see the new version.
        let seen = (0..4)
            .map(|_| receivers[1].recv_timeout(RECV_TIMEOUT).unwrap().view_version)
            .any(|seen| seen == version);

        assert!(seen);
    }

    #[test_log::test]
    fn test_shutdown_releases_workers_blocked_in_handoff() {
        let grid = small_grid(4);
        let (_publisher, reader) = view_channel(ViewState::default());
        let (mut pool, receivers) =
            TileWorkerPool::spawn(&grid, reader, Arc::new(WrappingPalette::default())).unwrap();

        // Let every worker finish a pass and park in its handoff.
        thread::sleep(Duration::from_millis(50));

        let start = Instant::now();
        pool.shutdown();

        assert!(start.elapsed() < RECV_TIMEOUT);
        assert!(pool.is_shut_down());
        assert_eq!(pool.worker_count(), 0);
        drop(receivers);
    }

    #[test_log::test]
    fn test_dropped_receivers_end_workers() {
        let grid = small_grid(3);
        let (_publisher, reader) = view_channel(ViewState::default());
        let (mut pool, receivers) =
            TileWorkerPool::spawn(&grid, reader, Arc::new(WrappingPalette::default())).unwrap();

        drop(receivers);

        for (_, handle) in pool.workers.drain(..) {
            handle.join().unwrap();
        }
    }

    #[test_log::test]
    fn test_drop_joins_workers() {
        let grid = small_grid(2);
        let (_publisher, reader) = view_channel(ViewState::default());
        let (pool, _receivers) =
            TileWorkerPool::spawn(&grid, reader, Arc::new(WrappingPalette::default())).unwrap();

        drop(pool);
    }
}
