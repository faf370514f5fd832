pub mod controller;
pub mod data;
pub mod errors;
pub mod fps;
pub mod frame_assembler;
pub mod ports;
pub mod shared_view;
pub mod view_controller;
pub mod worker_pool;
