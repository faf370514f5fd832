pub mod args;
pub mod held_keys;
pub mod run_headless;
