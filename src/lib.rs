mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::mosaic::controller::{FrameReport, MosaicController};
pub use controllers::mosaic::errors::MosaicError;
pub use controllers::mosaic::data::tile_result::TileResult;
pub use controllers::mosaic::fps::{FpsCounter, frame_time_remaining, pace_frame};
pub use controllers::mosaic::frame_assembler::{DrainReport, FrameAssembler};
pub use controllers::mosaic::ports::display_surface::DisplaySurface;
pub use controllers::mosaic::ports::key_source::KeySource;
pub use controllers::mosaic::shared_view::{ViewPublisher, ViewReader, ViewSnapshot, view_channel};
pub use controllers::mosaic::view_controller::ViewController;
pub use controllers::mosaic::worker_pool::TileWorkerPool;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::snapshot::{SnapshotController, SnapshotError};
pub use crate::core::actions::cancellation::{CancelToken, CancellationFlag, NeverCancel};
pub use crate::core::actions::partition_tiles::partition_tiles::{PartitionError, partition_tiles};
pub use crate::core::actions::render_mosaic::render_mosaic_rayon::{render_mosaic_frame, render_mosaic_tiles};
pub use crate::core::actions::render_tile::ports::colour_map::ColourMap;
pub use crate::core::actions::render_tile::render_tile::{RenderTileError, render_tile};
pub use crate::core::config::{ConfigError, RenderConfig};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::rgba::Rgba;
pub use crate::core::data::screen_size::ScreenSize;
pub use crate::core::data::tile_assignment::TileAssignment;
pub use crate::core::data::tile_grid::TileGrid;
pub use crate::core::data::view_state::ViewState;
pub use crate::core::fractals::mandelbrot::escape_time::escape_time;
pub use crate::core::fractals::mandelbrot::palette::WrappingPalette;
pub use crate::core::view::{ViewControlsSnapshot, ViewKey, ViewLimits, step_view};
pub use input::cli::args::{Cli, Command, ConfigArgs, KeyArg};
pub use input::cli::held_keys::HeldKeys;
pub use input::cli::run_headless::{HeadlessError, HeadlessSummary, RunHeadlessCommand};
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::memory::surface::MemorySurface;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::{GuiError, RunGuiCommand};
