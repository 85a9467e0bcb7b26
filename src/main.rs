use anyhow::Context;
use clap::Parser;
use datespark::cli::Cli;
use datespark::config::Config;
use datespark::shell::Shell;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    datespark::logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let (screen, preferences) = cli.startup(&config);
    tracing::info!(%screen, ?preferences, "starting");

    let shell = Shell::new(screen, preferences);
    datespark::ui::run(shell, Duration::from_millis(config.ui.tick_rate_ms))
        .context("terminal UI failed")?;
    Ok(())
}
