use anyhow::Context;
use clap::Parser;
use log::info;

use fractal_mosaic::{Cli, Command, HeldKeys, PpmFilePresenter, RunHeadlessCommand, SnapshotController, ViewKey};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Run(args) => {
            let config = args.config.to_config();
            let keys: HeldKeys = args.hold.iter().map(|&key| ViewKey::from(key)).collect();

            let mut command = RunHeadlessCommand::new(config, args.frames, keys);
            if let Some(output) = args.output {
                ensure_parent_dir(&output)?;
                command = command.with_output(PpmFilePresenter::new(), output);
            }

            let summary = command.execute().context("headless run failed")?;
            info!(
                "ran {} frames, final view ({}, {}) zoom {:e} cap {}, last fps {:?}",
                summary.frames,
                summary.final_view.position.real,
                summary.final_view.position.imag,
                summary.final_view.zoom,
                summary.final_view.iteration_cap,
                summary.last_fps
            );
        }
        Command::Snapshot(args) => {
            let config = args.config.to_config();
            let mut controller = SnapshotController::new(PpmFilePresenter::new());

            controller
                .generate(&config)
                .context("snapshot render failed")?;
            ensure_parent_dir(&args.output)?;
            controller
                .write(&args.output)
                .with_context(|| format!("cannot write {}", args.output.display()))?;
        }
    }

    Ok(())
}

fn ensure_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    Ok(())
}
