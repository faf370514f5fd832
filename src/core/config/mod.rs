pub mod render_config;

pub use render_config::{ConfigError, RenderConfig};
