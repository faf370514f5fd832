//! Input adapters: command-line arguments and the headless driver, plus the
//! optional window.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
