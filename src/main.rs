use anyhow::{Context, Result};
use clap::Parser;
use std::sync::mpsc;

use tabpad::autosave::AutosaveScheduler;
use tabpad::cli::CliArgs;
use tabpad::config::EditorConfig;
use tabpad::config_paths;
use tabpad::file_io::DiskGateway;
use tabpad::messages::{AppMsg, Msg};
use tabpad::model::AppModel;
use tabpad::runtime::{console, ConsoleInput, RfdPrompter, Runtime};

fn main() -> Result<()> {
    tabpad::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();

    if let Err(e) = config_paths::ensure_storage_dir(&config.storage_dir) {
        tracing::warn!("Could not create storage directory: {}", e);
    }

    let interval = config.autosave_interval();
    let model = AppModel::new(config);
    let mut runtime = Runtime::new(model, DiskGateway, RfdPrompter);

    for path in args.paths {
        runtime.dispatch(Msg::App(AppMsg::OpenFile(path)));
    }

    let (tx, rx) = mpsc::channel::<ConsoleInput>();
    AutosaveScheduler::new(interval)
        .spawn(tx.clone())
        .context("failed to start autosave thread")?;
    console::spawn_stdin_reader(tx).context("failed to start stdin reader")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    console::run(&mut runtime, rx, &mut out).context("console output failed")?;

    tracing::info!("exiting");
    Ok(())
}
