pub mod cancellation;
pub mod partition_tiles;
pub mod render_mosaic;
pub mod render_tile;
