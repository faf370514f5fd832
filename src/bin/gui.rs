use anyhow::Context;
use clap::Parser;

use fractal_mosaic::{ConfigArgs, RunGuiCommand};

/// Interactive window over the streaming mosaic
#[derive(Debug, Parser)]
#[command(name = "gui", version)]
struct GuiCli {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = GuiCli::parse();
    let config = cli.config.to_config();
    config.validate().context("invalid configuration")?;

    RunGuiCommand::new(config)
        .execute()
        .context("gui failed")
}
