pub mod tile_result;
