use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::core::data::view_state::ViewState;

/// The view a worker renders one pass with.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub version: u64,
    pub state: Arc<ViewState>,
}

struct SharedView {
    current: RwLock<ViewSnapshot>,
    version: AtomicU64,
}

/// Sole writer of the shared view. Not `Clone`.
pub struct ViewPublisher {
    shared: Arc<SharedView>,
}

/// Cheap handle that workers use to read the latest published view.
#[derive(Clone)]
pub struct ViewReader {
    shared: Arc<SharedView>,
}

pub fn view_channel(initial: ViewState) -> (ViewPublisher, ViewReader) {
    let shared = Arc::new(SharedView {
        current: RwLock::new(ViewSnapshot {
            version: 0,
            state: Arc::new(initial),
        }),
        version: AtomicU64::new(0),
    });

    (
        ViewPublisher {
            shared: Arc::clone(&shared),
        },
        ViewReader { shared },
    )
}

impl ViewPublisher {
    /// Swaps in `state` as a new snapshot and returns its version.
    pub fn publish(&self, state: ViewState) -> u64 {
        // The guarded value is replaced whole, so a poisoned lock still holds
        // a complete snapshot.
        let mut guard = self
            .shared
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let version = guard.version + 1;
        *guard = ViewSnapshot {
            version,
            state: Arc::new(state),
        };
        self.shared.version.store(version, Ordering::Release);

        version
    }
}

impl ViewReader {
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        read_snapshot(&self.shared)
    }

    /// Latest published version without taking the lock.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.shared.version.load(Ordering::Acquire)
    }
}

fn read_snapshot(shared: &SharedView) -> ViewSnapshot {
    shared
        .current
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
