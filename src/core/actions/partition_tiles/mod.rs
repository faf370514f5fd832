pub mod partition_tiles;
