use std::time::Duration;

use thiserror::Error;

use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_state::ViewState;
use crate::core::view::ViewLimits;

const DEFAULT_SCREEN_WIDTH: u32 = 1800;
const DEFAULT_SCREEN_HEIGHT: u32 = 1000;
const DEFAULT_WORKER_COUNT: u32 = 24;
const DEFAULT_TARGET_FRAME_TIME: Duration = Duration::from_millis(20);
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("worker count must be greater than zero")]
    ZeroWorkers,
    #[error("screen size must be positive: {width}x{height}")]
    ZeroScreen { width: u32, height: u32 },
    #[error("zoom must be greater than zero, got {zoom}")]
    NonPositiveZoom { zoom: f64 },
    #[error("iteration cap must be greater than zero")]
    ZeroIterationCap,
    #[error("zoom speed must lie strictly between 0 and 1, got {zoom_speed}")]
    InvalidZoomSpeed { zoom_speed: f64 },
    #[error("target frame time must be greater than zero")]
    ZeroFrameTime,
    #[error("target fps must be greater than zero")]
    ZeroTargetFps,
    #[error("view limits are inconsistent: zoom in [{min_zoom}, {max_zoom}], cap up to {max_iteration_cap}")]
    InvalidLimits {
        min_zoom: f64,
        max_zoom: f64,
        max_iteration_cap: u32,
    },
    #[error("initial zoom {zoom} lies outside [{min_zoom}, {max_zoom}]")]
    ZoomOutsideLimits {
        zoom: f64,
        min_zoom: f64,
        max_zoom: f64,
    },
    #[error("initial iteration cap {iteration_cap} exceeds the limit of {max_iteration_cap}")]
    IterationCapAboveLimit {
        iteration_cap: u32,
        max_iteration_cap: u32,
    },
}

/// Everything fixed at startup: screen geometry, worker count, frame budget
/// and the initial view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub screen: ScreenSize,
    pub worker_count: u32,
    pub target_frame_time: Duration,
    pub target_fps: u32,
    pub fps_update_interval: Duration,
    pub initial_view: ViewState,
    pub limits: ViewLimits,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSize::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT),
            worker_count: DEFAULT_WORKER_COUNT,
            target_frame_time: DEFAULT_TARGET_FRAME_TIME,
            target_fps: DEFAULT_TARGET_FPS,
            fps_update_interval: DEFAULT_FPS_UPDATE_INTERVAL,
            initial_view: ViewState::default(),
            limits: ViewLimits::default(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }

        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::ZeroScreen {
                width: self.screen.width,
                height: self.screen.height,
            });
        }

        let view = &self.initial_view;

        // NaN fails this comparison too
        if !(view.zoom > 0.0) {
            return Err(ConfigError::NonPositiveZoom { zoom: view.zoom });
        }

        if view.iteration_cap == 0 {
            return Err(ConfigError::ZeroIterationCap);
        }

        if !(view.zoom_speed > 0.0 && view.zoom_speed < 1.0) {
            return Err(ConfigError::InvalidZoomSpeed {
                zoom_speed: view.zoom_speed,
            });
        }

        if self.target_frame_time.is_zero() {
            return Err(ConfigError::ZeroFrameTime);
        }

        if self.target_fps == 0 {
            return Err(ConfigError::ZeroTargetFps);
        }

        let limits = &self.limits;
        if !(limits.min_zoom > 0.0 && limits.min_zoom <= limits.max_zoom)
            || limits.max_iteration_cap == 0
        {
            return Err(ConfigError::InvalidLimits {
                min_zoom: limits.min_zoom,
                max_zoom: limits.max_zoom,
                max_iteration_cap: limits.max_iteration_cap,
            });
        }

        // stepping clamps into these bounds, so the start must already be inside
        if view.zoom < limits.min_zoom || view.zoom > limits.max_zoom {
            return Err(ConfigError::ZoomOutsideLimits {
                zoom: view.zoom,
                min_zoom: limits.min_zoom,
                max_zoom: limits.max_zoom,
            });
        }

        if view.iteration_cap > limits.max_iteration_cap {
            return Err(ConfigError::IterationCapAboveLimit {
                iteration_cap: view.iteration_cap,
                max_iteration_cap: limits.max_iteration_cap,
            });
        }

        Ok(())
    }

    /// Time budget for one frame when pacing to `target_fps`.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}
