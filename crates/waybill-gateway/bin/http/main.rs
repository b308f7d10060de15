mod cli;
mod telemetry;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use waybill_gateway::{App, AppState};
use waybill_generator::RandomGenerator;
use waybill_issuer::{IssuerService, RetryPolicy};
use waybill_storage::{InMemoryRegistry, MySqlRegistry, RegistryBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        max_attempts = config.max_attempts,
        "starting tracking number gateway"
    );

    let registry = build_registry(&config).await?;
    let policy = RetryPolicy::builder()
        .max_attempts(config.max_attempts)
        .build();
    let issuer = IssuerService::with_policy(registry, RandomGenerator::new(), policy)?;

    let app = App::router(AppState::new(Arc::new(issuer)));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_registry(config: &CLI) -> anyhow::Result<RegistryBackend> {
    match config.storage {
        StorageBackendArg::InMemory => Ok(InMemoryRegistry::new().into()),
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let registry = MySqlRegistry::connect(mysql_dsn).await?;
            if config.init_schema {
                registry.ensure_schema().await?;
                info!("ensured issued_tracking_codes schema");
            }
            Ok(registry.into())
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
