use crate::core::data::rgba::Rgba;

pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Rgba;
    fn display_name(&self) -> &str;
}
