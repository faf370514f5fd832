#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_iteration_cap: u32,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_zoom: 1e-15,
            max_zoom: 1e3,
            max_iteration_cap: 1 << 16,
        }
    }
}
