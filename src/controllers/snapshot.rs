use std::path::Path;
use std::time::{Duration, Instant};

use log::info;
use thiserror::Error;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::partition_tiles::partition_tiles::{PartitionError, partition_tiles};
use crate::core::actions::render_mosaic::render_mosaic_rayon::render_mosaic_frame;
use crate::core::actions::render_tile::render_tile::RenderTileError;
use crate::core::config::{ConfigError, RenderConfig};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::rgba::Rgba;
use crate::core::fractals::mandelbrot::palette::WrappingPalette;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot partition screen: {0}")]
    Partition(#[from] PartitionError),
    #[error("render failed: {0}")]
    Render(#[from] RenderTileError),
    #[error("nothing rendered yet")]
    NothingRendered,
    #[error("cannot write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// One-shot render of the initial view using the same tile grid as the
/// streaming pipeline, handed to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &RenderConfig) -> Result<Duration, SnapshotError> {
        config.validate()?;

        let grid = partition_tiles(config.worker_count, config.screen)?;
        let palette = WrappingPalette::default();

        let start = Instant::now();
        let frame = render_mosaic_frame(
            &grid,
            &config.initial_view,
            &palette,
            Rgba::BLACK,
            &NeverCancel,
        )?;
        let duration = start.elapsed();

        info!(
            "rendered {}x{} snapshot as {}x{} tiles in {:?}",
            config.screen.width,
            config.screen.height,
            grid.columns(),
            grid.rows(),
            duration
        );

        self.buffer = Some(frame);

        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let buffer = self.buffer.as_ref().ok_or(SnapshotError::NothingRendered)?;
        self.presenter.present(buffer, &filepath)?;

        info!("snapshot written to {}", filepath.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::data::screen_size::ScreenSize;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockFilePresenter {
        presented: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for &MockFilePresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented.borrow_mut().push((
                filepath.as_ref().to_path_buf(),
                buffer.width(),
                buffer.height(),
            ));
            Ok(())
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            screen: ScreenSize::new(61, 40),
            worker_count: 6,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_fails() {
        let presenter = MockFilePresenter::default();
        let controller = SnapshotController::new(&presenter);

        assert!(matches!(
            controller.write("unused.ppm"),
            Err(SnapshotError::NothingRendered)
        ));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_full_screen() {
        let presenter = MockFilePresenter::default();
        let mut controller = SnapshotController::new(&presenter);

        controller.generate(&small_config()).unwrap();
        controller.write("mosaic.ppm").unwrap();

        assert_eq!(
            *presenter.presented.borrow(),
            vec![(PathBuf::from("mosaic.ppm"), 61, 40)]
        );
    }

    #[test]
    fn test_truncated_columns_stay_black() {
        let presenter = MockFilePresenter::default();
        let mut controller = SnapshotController::new(&presenter);

        // 6 workers -> 2 rows x 3 columns of 20px, leaving column 60 uncovered
        controller.generate(&small_config()).unwrap();
        let buffer = controller.buffer().unwrap();

        for y in 0..40 {
            assert_eq!(buffer.pixel(Point::new(60, y)).unwrap(), Rgba::BLACK);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let presenter = MockFilePresenter::default();
        let mut controller = SnapshotController::new(&presenter);
        let config = RenderConfig {
            worker_count: 0,
            ..RenderConfig::default()
        };

        assert!(matches!(
            controller.generate(&config),
            Err(SnapshotError::Config(ConfigError::ZeroWorkers))
        ));
    }
}
