use anyhow::Context;
use clap::Parser;
use postboard::config::Config;
use postboard::logging::init_tracing;
use postboard::ui::runtime;
use std::path::PathBuf;

/// Terminal client for a JSON posts API.
#[derive(Debug, Parser)]
#[command(name = "postboard", version, about)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let log_path = init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(
        "postboard v{} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime::run(&config, tokio_runtime.handle()).context("Terminal UI failed")?;

    tokio_runtime.shutdown_background();
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }

    Ok(config)
}
