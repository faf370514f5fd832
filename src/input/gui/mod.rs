//! Windowed front-end: winit for the window and keys, pixels for the
//! framebuffer, egui for the status overlay.

pub mod app;
pub mod commands;
pub mod keyboard;
