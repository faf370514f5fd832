/// The fixed set of keys the view controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    IterationsUp,
    IterationsDown,
}

impl ViewKey {
    pub const ALL: &'static [ViewKey] = &[
        ViewKey::PanLeft,
        ViewKey::PanRight,
        ViewKey::PanUp,
        ViewKey::PanDown,
        ViewKey::ZoomIn,
        ViewKey::ZoomOut,
        ViewKey::IterationsUp,
        ViewKey::IterationsDown,
    ];
}

/// Held state of every view key for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewControlsSnapshot {
    pub pan_left: bool,
    pub pan_right: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub iterations_up: bool,
    pub iterations_down: bool,
}

impl ViewControlsSnapshot {
    pub fn from_fn(mut is_down: impl FnMut(ViewKey) -> bool) -> Self {
        Self {
            pan_left: is_down(ViewKey::PanLeft),
            pan_right: is_down(ViewKey::PanRight),
            pan_up: is_down(ViewKey::PanUp),
            pan_down: is_down(ViewKey::PanDown),
            zoom_in: is_down(ViewKey::ZoomIn),
            zoom_out: is_down(ViewKey::ZoomOut),
            iterations_up: is_down(ViewKey::IterationsUp),
            iterations_down: is_down(ViewKey::IterationsDown),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
