pub mod coords;
pub mod escape_time;
pub mod palette;
