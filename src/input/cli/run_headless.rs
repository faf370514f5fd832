use std::path::PathBuf;
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::controllers::mosaic::controller::MosaicController;
use crate::controllers::mosaic::errors::MosaicError;
use crate::controllers::mosaic::fps::pace_frame;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::config::RenderConfig;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::view_state::ViewState;
use crate::input::cli::held_keys::HeldKeys;
use crate::presenters::memory::surface::MemorySurface;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Mosaic(#[from] MosaicError),
    #[error("cannot allocate display surface: {0}")]
    Surface(#[from] PixelBufferError),
    #[error("cannot write frame: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessSummary {
    pub frames: u64,
    pub final_view: ViewState,
    pub last_fps: Option<u32>,
    /// Whether every tile had delivered at least once by the last frame.
    pub complete: bool,
}

/// Drives the streaming pipeline without a window, one paced frame at a time.
pub struct RunHeadlessCommand<P: FilePresenterPort> {
    config: RenderConfig,
    frames: u64,
    keys: HeldKeys,
    output: Option<(P, PathBuf)>,
}

impl<P: FilePresenterPort> RunHeadlessCommand<P> {
    pub fn new(config: RenderConfig, frames: u64, keys: HeldKeys) -> Self {
        Self {
            config,
            frames,
            keys,
            output: None,
        }
    }

    #[must_use]
    pub fn with_output(mut self, presenter: P, filepath: PathBuf) -> Self {
        self.output = Some((presenter, filepath));
        self
    }

    pub fn execute(&self) -> Result<HeadlessSummary, HeadlessError> {
        let mut controller = MosaicController::new(self.config.clone())?;
        let mut surface = MemorySurface::new(self.config.screen)?;
        let frame_interval = self.config.frame_interval();

        for _ in 0..self.frames {
            let frame_start = Instant::now();
            controller.tick(&self.keys, &mut surface);
            pace_frame(frame_start, frame_interval);
        }

        let summary = HeadlessSummary {
            frames: self.frames,
            final_view: controller.view(),
            last_fps: controller.last_fps(),
            complete: controller.assembler().is_complete(),
        };
        controller.shutdown();

        if let Some((presenter, filepath)) = &self.output {
            presenter.present(surface.pixel_buffer(), filepath)?;
            info!("last frame written to {}", filepath.display());
        }

        Ok(summary)
    }
}
