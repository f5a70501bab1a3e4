use anyhow::Context;
use clap::Parser;
use departments::cli::Cli;
use departments::config::Config;
use departments::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    logging::init(&config.logging.filter);
    tracing::debug!(backend = ?config.storage.backend, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    departments::run(&config, cli.command, &mut stdout).await
}
