use anyhow::Result;
use clap::Parser;
use ibus_tweaker_lib::bootstrap::{init_tracing_subscriber, resolve_config};
use ibus_tweaker_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.clone())?;
    init_tracing_subscriber(&config.log_dir, cli.verbose)?;
    tracing::debug!(?config, "Resolved configuration");

    cli::run(cli, &config).await
}
