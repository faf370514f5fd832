use std::time::Instant;

use crossbeam_channel::{Receiver, Select};
use log::trace;

use crate::controllers::mosaic::data::tile_result::TileResult;
use crate::controllers::mosaic::ports::display_surface::DisplaySurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrainReport {
    /// Fresh results taken in this window.
    pub received: usize,
    /// Workers found disconnected in this window.
    pub disconnected: usize,
    /// Live workers that did not deliver before the deadline.
    pub pending: usize,
}

/// Collects tile results into one slot per worker and composites them.
///
/// Slots keep the most recent result of their worker until it is replaced,
/// so a slow tile shows its previous pass rather than a hole.
pub struct FrameAssembler {
    receivers: Vec<Receiver<TileResult>>,
    slots: Vec<Option<TileResult>>,
    connected: Vec<bool>,
}

impl FrameAssembler {
    #[must_use]
    pub fn new(receivers: Vec<Receiver<TileResult>>) -> Self {
        let worker_count = receivers.len();

        Self {
            receivers,
            slots: vec![None; worker_count],
            connected: vec![true; worker_count],
        }
    }

    /// Takes at most one result from each worker, returning once every live
    /// worker has delivered or `deadline` has passed.
    pub fn drain_until(&mut self, deadline: Instant) -> DrainReport {
        let mut waiting: Vec<usize> = (0..self.receivers.len())
            .filter(|&worker_index| self.connected[worker_index])
            .collect();
        let mut report = DrainReport::default();

        while !waiting.is_empty() {
            let mut select = Select::new();
            for &worker_index in &waiting {
                select.recv(&self.receivers[worker_index]);
            }

            let Ok(operation) = select.select_deadline(deadline) else {
                break;
            };

            // Select indices follow insertion order, i.e. positions in `waiting`.
            let position = operation.index();
            let worker_index = waiting.swap_remove(position);

            match operation.recv(&self.receivers[worker_index]) {
                Ok(result) => {
                    trace!(
                        "tile {} delivered view v{} in {:?}",
                        worker_index, result.view_version, result.render_duration
                    );
                    debug_assert_eq!(result.worker_index, worker_index);
                    self.slots[worker_index] = Some(result);
                    report.received += 1;
                }
                Err(_) => {
                    self.connected[worker_index] = false;
                    report.disconnected += 1;
                }
            }
        }

        report.pending = waiting.len();
        report
    }

    /// Blits every occupied slot, fresh or stale, onto `surface`.
    pub fn composite<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        for result in self.slots.iter().flatten() {
            surface.blit(result.origin, &result.pixel_buffer);
        }
    }

    #[must_use]
    pub fn slot(&self, worker_index: usize) -> Option<&TileResult> {
        self.slots.get(worker_index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn filled_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True once every worker has delivered at least one result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn connected_workers(&self) -> usize {
        self.connected.iter().filter(|&&connected| connected).count()
    }
}
