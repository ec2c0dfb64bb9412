// src/main.rs
use anyhow::Result;
use idle_watchdog::{config, IdleMonitor};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("idle_watchdog=info".parse()?),
        )
        .init();

    // Defaults are the fixed endpoints; a config file may override them.
    let config = match std::env::args().nth(1) {
        Some(config_path) => {
            info!("Loading configuration from: {}", config_path);
            config::load_config(&config_path).await?
        }
        None => config::WatchdogConfig::default(),
    };

    let monitor = IdleMonitor::new(config)?;
    let outcome = monitor.run().await?;
    tracing::debug!(?outcome, "Watchdog run finished");

    Ok(())
}
