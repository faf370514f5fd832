pub mod controls;
pub mod limits;
pub mod step;

pub use controls::{ViewControlsSnapshot, ViewKey};
pub use limits::ViewLimits;
pub use step::step_view;
