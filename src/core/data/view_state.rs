use crate::core::data::complex::Complex;

/// Immutable description of what the workers should render.
///
/// A new value is published whenever input changes the view; workers hold on
/// to the snapshot they started a pass with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub position: Complex,
    /// Complex-plane distance spanned by one tile width. Always positive.
    pub zoom: f64,
    /// Escape-time iteration limit. Never zero.
    pub iteration_cap: u32,
    pub pan_speed: f64,
    pub zoom_speed: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            position: Complex::new(-0.5, 0.0),
            zoom: 0.5,
            iteration_cap: 256,
            pan_speed: 0.2,
            zoom_speed: 0.05,
        }
    }
}
