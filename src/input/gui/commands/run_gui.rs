use log::info;
use thiserror::Error;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::mosaic::controller::MosaicController;
use crate::controllers::mosaic::errors::MosaicError;
use crate::core::config::RenderConfig;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("cannot create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("cannot create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("render error: {0}")]
    Render(#[source] pixels::Error),
    #[error("cannot resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error(transparent)]
    Mosaic(#[from] MosaicError),
}

pub struct RunGuiCommand {
    config: RenderConfig,
}

impl RunGuiCommand {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let screen = self.config.screen;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Mosaic")
                .with_inner_size(PhysicalSize::new(screen.width, screen.height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, screen)?;
        let controller = MosaicController::new(self.config)?;
        info!("window open at {}x{}", screen.width, screen.height);

        GuiApp::new(&event_loop, window, presenter, controller).run(event_loop, window)?;

        Ok(())
    }
}
