//! holonet - fetch and display Star Wars API resources
//!
//! Starts a small HTTP server whose `/api` route triggers a run, or performs a
//! single run with `--once`.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use holonet::cli::{Cli, StartupConfig};
use holonet::data::SwapiClient;
use holonet::display::ConsoleSink;
use holonet::logging::init_logging;
use holonet::orchestrator::Orchestrator;
use holonet::server;
use holonet::stats::RunCounters;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_env(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(config.debug);
    info!(
        debug = config.debug,
        timeout_ms = config.timeout.as_millis() as u64,
        "holonet v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let counters = Arc::new(RunCounters::new());
    let client = SwapiClient::new(config.base_url.clone(), config.timeout, Arc::clone(&counters))?;
    let orchestrator = Arc::new(Orchestrator::new(
        client,
        counters,
        Arc::new(ConsoleSink),
        config.debug,
    ));

    if config.once {
        orchestrator.run().await;
        return Ok(());
    }

    server::serve(orchestrator, config.port).await?;
    Ok(())
}
