use log::debug;

use crate::controllers::mosaic::ports::key_source::KeySource;
use crate::controllers::mosaic::shared_view::{ViewPublisher, ViewReader, view_channel};
use crate::core::data::view_state::ViewState;
use crate::core::view::{ViewLimits, step_view};

/// Sole writer of the shared view. Runs on the render thread once per frame.
pub struct ViewController {
    publisher: ViewPublisher,
    limits: ViewLimits,
    current: ViewState,
}

impl ViewController {
    #[must_use]
    pub fn new(initial: ViewState, limits: ViewLimits) -> (Self, ViewReader) {
        let (publisher, reader) = view_channel(initial);

        (
            Self {
                publisher,
                limits,
                current: initial,
            },
            reader,
        )
    }

    /// Reads the held keys, steps the view and publishes it if anything
    /// changed. Returns the new version when a publication happened.
    pub fn update<K: KeySource + ?Sized>(&mut self, keys: &K) -> Option<u64> {
        let controls = keys.snapshot();
        if controls.is_idle() {
            return None;
        }

        let next = step_view(&self.current, controls, &self.limits);
        if next == self.current {
            return None;
        }

        self.current = next;
        let version = self.publisher.publish(next);
        debug!(
            "published view v{}: position=({}, {}) zoom={:e} cap={}",
            version, next.position.real, next.position.imag, next.zoom, next.iteration_cap
        );

        Some(version)
    }

    #[must_use]
    pub fn current(&self) -> ViewState {
        self.current
    }
}
