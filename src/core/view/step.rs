use crate::core::view::controls::ViewControlsSnapshot;
use crate::core::view::limits::ViewLimits;
use crate::core::data::view_state::ViewState;

/// Applies one frame of held keys to `view` and returns the next state.
///
/// Opposing keys do not cancel: left wins over right, up over down, zoom-in
/// over zoom-out, more iterations over fewer. Pan distance scales with the
/// current zoom so on-screen speed stays constant at every depth.
#[must_use]
pub fn step_view(view: &ViewState, controls: ViewControlsSnapshot, limits: &ViewLimits) -> ViewState {
    let mut next = *view;
    let pan_step = view.pan_speed * view.zoom;

    if controls.pan_left {
        next.position.real -= pan_step;
    } else if controls.pan_right {
        next.position.real += pan_step;
    }

    if controls.pan_up {
        next.position.imag -= pan_step;
    } else if controls.pan_down {
        next.position.imag += pan_step;
    }

    let zoom_step = view.zoom_speed * view.zoom;

    if controls.zoom_in {
        next.zoom -= zoom_step;
    } else if controls.zoom_out {
        next.zoom += zoom_step;
    }

    next.zoom = next.zoom.clamp(limits.min_zoom, limits.max_zoom);

    if controls.iterations_up {
        next.iteration_cap = view
            .iteration_cap
            .saturating_mul(2)
            .min(limits.max_iteration_cap);
    } else if controls.iterations_down {
        next.iteration_cap = (view.iteration_cap / 2).max(1);
    }

    next
}
