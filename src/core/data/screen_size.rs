#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Integer centre used as the origin of the complex-plane mapping.
    #[must_use]
    pub fn half(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}
