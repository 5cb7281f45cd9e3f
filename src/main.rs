use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use pointcheck::{Config, SharedConfig, SystemResolver, Verifier};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let config_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = config_init(&config_file)?;

    let domain_log = config
        .domain_log()
        .await
        .with_context(|| format!("opening domain log {}", config.domain_log_path))?;
    let resolver = SystemResolver::from_system_conf().context("loading resolver config")?;
    let verifier = Verifier::new(config.clone(), domain_log, Arc::new(resolver));

    let api_server = pointcheck::api::new(config.clone(), verifier, shutdown_signal())?;
    tracing::info!("server is running on {}", config.listen_addr());
    api_server.await?;

    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointcheck=info,tower_http=info".into()),
        )
        .init();
}

fn config_init(config_file: &str) -> Result<SharedConfig> {
    let config = Config::try_from_file(config_file)
        .with_context(|| format!("loading config from {config_file}"))?;
    tracing::debug!("loaded config from {config_file}");
    Ok(Arc::new(config))
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("quitting from signal"),
        Err(err) => tracing::error!("unable to listen for shutdown signal: {err}"),
    }
}
