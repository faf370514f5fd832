pub mod display_surface;
pub mod key_source;
