pub mod mosaic;
pub mod ports;
pub mod snapshot;
