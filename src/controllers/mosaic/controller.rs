use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::mosaic::errors::MosaicError;
use crate::controllers::mosaic::fps::FpsCounter;
use crate::controllers::mosaic::frame_assembler::{DrainReport, FrameAssembler};
use crate::controllers::mosaic::ports::display_surface::DisplaySurface;
use crate::controllers::mosaic::ports::key_source::KeySource;
use crate::controllers::mosaic::view_controller::ViewController;
use crate::controllers::mosaic::worker_pool::TileWorkerPool;
use crate::core::actions::partition_tiles::partition_tiles::partition_tiles;
use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::config::RenderConfig;
use crate::core::data::tile_grid::TileGrid;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::palette::WrappingPalette;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame_index: u64,
    pub drain: DrainReport,
    /// Version published by this frame's input step, if any.
    pub published_version: Option<u64>,
    pub view: ViewState,
    /// Set on the frame that closed an FPS interval.
    pub fps: Option<u32>,
    pub frame_time: Duration,
}

/// Owns the whole streaming pipeline: view publication, the worker pool and
/// the frame assembler. Everything except the workers runs on the thread
/// that calls [`MosaicController::tick`].
pub struct MosaicController {
    config: RenderConfig,
    grid: TileGrid,
    view: ViewController,
    assembler: FrameAssembler,
    pool: TileWorkerPool,
    fps: FpsCounter,
    frame_index: u64,
}

impl MosaicController {
    pub fn new(config: RenderConfig) -> Result<Self, MosaicError> {
        Self::with_colour_map(config, Arc::new(WrappingPalette::default()))
    }

    pub fn with_colour_map(
        config: RenderConfig,
        colour_map: Arc<dyn ColourMap>,
    ) -> Result<Self, MosaicError> {
        config.validate()?;

        let grid = partition_tiles(config.worker_count, config.screen)?;
        let (uncovered_x, uncovered_y) = grid.uncovered();
        info!(
            "{} workers as {}x{} tiles of {}x{} on {}x{} ({}x{} px uncovered), palette {}",
            grid.worker_count(),
            grid.columns(),
            grid.rows(),
            grid.tile_width(),
            grid.tile_height(),
            config.screen.width,
            config.screen.height,
            uncovered_x,
            uncovered_y,
            colour_map.display_name()
        );

        let (view, reader) = ViewController::new(config.initial_view, config.limits);
        let (pool, receivers) = TileWorkerPool::spawn(&grid, reader, colour_map)?;
        let assembler = FrameAssembler::new(receivers);
        let fps = FpsCounter::new(config.fps_update_interval);

        Ok(Self {
            config,
            grid,
            view,
            assembler,
            pool,
            fps,
            frame_index: 0,
        })
    }

    /// Runs one frame: input, deadline-bounded drain, composite, statistics.
    pub fn tick<K, S>(&mut self, keys: &K, surface: &mut S) -> FrameReport
    where
        K: KeySource + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        debug_assert_eq!(
            surface.size(),
            self.config.screen,
            "surface does not match the configured screen"
        );

        let frame_start = Instant::now();

        let published_version = self.view.update(keys);

        let drain = self
            .assembler
            .drain_until(frame_start + self.config.target_frame_time);
        self.assembler.composite(surface);

        let now = Instant::now();
        let fps = self.fps.record_frame(now);
        if let Some(fps) = fps {
            info!("fps: {}", fps);
        }

        debug!(
            "frame {}: {} fresh, {} pending, {} disconnected",
            self.frame_index, drain.received, drain.pending, drain.disconnected
        );

        let report = FrameReport {
            frame_index: self.frame_index,
            drain,
            published_version,
            view: self.view.current(),
            fps,
            frame_time: now.duration_since(frame_start),
        };
        self.frame_index += 1;

        report
    }

    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view.current()
    }

    #[must_use]
    pub fn assembler(&self) -> &FrameAssembler {
        &self.assembler
    }

    #[must_use]
    pub fn last_fps(&self) -> Option<u32> {
        self.fps.last()
    }

    pub fn shutdown(&mut self) {
        self.pool.shutdown();
    }
}

impl Drop for MosaicController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
