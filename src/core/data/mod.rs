pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod rgba;
pub mod screen_size;
pub mod tile_assignment;
pub mod view_state;
pub mod tile_grid;
