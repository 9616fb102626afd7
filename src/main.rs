use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use pokecard::api::PokeApiClient;
use pokecard::cli::Cli;
use pokecard::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config.logging).context("Failed to open log file")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let client = PokeApiClient::new(&config.api)?;
    tracing::info!(base_url = client.base_url(), "Using PokeAPI endpoint");

    pokecard::ui::runtime::run(&config, Arc::new(client), runtime.handle().clone())?;

    runtime.shutdown_background();
    Ok(())
}
