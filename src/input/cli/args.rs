use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::config::RenderConfig;
use crate::core::data::complex::Complex;
use crate::core::data::screen_size::ScreenSize;
use crate::core::view::ViewKey;

#[derive(Debug, Parser)]
#[command(name = "fractal_mosaic", version, about = "Tiled, streaming Mandelbrot renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the streaming pipeline headless for a number of frames
    Run(RunArgs),
    /// Render every tile once and write the mosaic to a PPM file
    Snapshot(SnapshotArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Number of frames to run
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Keys held down for the whole run
    #[arg(long = "hold", value_enum)]
    pub hold: Vec<KeyArg>,

    /// Write the last composited frame here (PPM)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[arg(long, short, default_value = "output/mosaic.ppm")]
    pub output: PathBuf,
}

/// Overrides for [`RenderConfig`]; anything left out keeps its default.
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long)]
    pub workers: Option<u32>,
    /// Frame deadline in milliseconds
    #[arg(long)]
    pub frame_time_ms: Option<u64>,
    #[arg(long)]
    pub target_fps: Option<u32>,
    #[arg(long)]
    pub fps_interval_ms: Option<u64>,
    /// Real part of the view centre
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<f64>,
    /// Imaginary part of the view centre
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub zoom: Option<f64>,
    #[arg(long)]
    pub iterations: Option<u32>,
    #[arg(long, allow_negative_numbers = true)]
    pub pan_speed: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub zoom_speed: Option<f64>,
}

impl ConfigArgs {
    #[must_use]
    pub fn to_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();

        config.screen = ScreenSize::new(
            self.width.unwrap_or(config.screen.width),
            self.height.unwrap_or(config.screen.height),
        );
        if let Some(workers) = self.workers {
            config.worker_count = workers;
        }
        if let Some(ms) = self.frame_time_ms {
            config.target_frame_time = Duration::from_millis(ms);
        }
        if let Some(fps) = self.target_fps {
            config.target_fps = fps;
        }
        if let Some(ms) = self.fps_interval_ms {
            config.fps_update_interval = Duration::from_millis(ms);
        }

        let view = &mut config.initial_view;
        view.position = Complex::new(
            self.x.unwrap_or(view.position.real),
            self.y.unwrap_or(view.position.imag),
        );
        if let Some(zoom) = self.zoom {
            view.zoom = zoom;
        }
        if let Some(iterations) = self.iterations {
            view.iteration_cap = iterations;
        }
        if let Some(pan_speed) = self.pan_speed {
            view.pan_speed = pan_speed;
        }
        if let Some(zoom_speed) = self.zoom_speed {
            view.zoom_speed = zoom_speed;
        }

        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyArg {
    Left,
    Right,
    Up,
    Down,
    ZoomIn,
    ZoomOut,
    More,
    Fewer,
}

impl From<KeyArg> for ViewKey {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Left => ViewKey::PanLeft,
            KeyArg::Right => ViewKey::PanRight,
            KeyArg::Up => ViewKey::PanUp,
            KeyArg::Down => ViewKey::PanDown,
            KeyArg::ZoomIn => ViewKey::ZoomIn,
            KeyArg::ZoomOut => ViewKey::ZoomOut,
            KeyArg::More => ViewKey::IterationsUp,
            KeyArg::Fewer => ViewKey::IterationsDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_overrides_gives_default_config() {
        assert_eq!(ConfigArgs::default().to_config(), RenderConfig::default());
    }

    #[test]
    fn test_run_parses_overrides_and_keys() {
        let cli = Cli::try_parse_from([
            "fractal_mosaic",
            "run",
            "--frames",
            "10",
            "--workers",
            "9",
            "--x",
            "-1.25",
            "--zoom",
            "0.01",
            "--hold",
            "zoom-in",
            "--hold",
            "left",
        ])
        .unwrap();

        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let config = args.config.to_config();

        assert_eq!(args.frames, 10);
        assert_eq!(args.hold, vec![KeyArg::ZoomIn, KeyArg::Left]);
        assert_eq!(args.output, None);
        assert_eq!(config.worker_count, 9);
        assert_eq!(config.initial_view.position, Complex::new(-1.25, 0.0));
        assert_eq!(config.initial_view.zoom, 0.01);
        assert_eq!(config.screen, RenderConfig::default().screen);
    }

    #[test]
    fn test_snapshot_has_default_output() {
        let cli = Cli::try_parse_from(["fractal_mosaic", "snapshot", "--width", "320"]).unwrap();

        let Command::Snapshot(args) = cli.command else {
            panic!("expected snapshot");
        };

        assert_eq!(args.output, PathBuf::from("output/mosaic.ppm"));
        assert_eq!(args.config.to_config().screen, ScreenSize::new(320, 1000));
    }

    #[test]
    fn test_key_args_cover_every_view_key() {
        let mapped: Vec<ViewKey> = KeyArg::value_variants()
            .iter()
            .map(|&key| ViewKey::from(key))
            .collect();

        assert_eq!(mapped, ViewKey::ALL);
    }
}
