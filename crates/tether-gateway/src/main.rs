use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tether_core::LinkService;
use tether_gateway::cli::{LogFormat, StorageBackendArg, CLI};
use tether_gateway::{App, AppState};
use tether_generator::RandomGenerator;
use tether_service::LinkStoreService;
use tether_storage::{InMemoryStore, RedisStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        storage_backend = %config.storage,
        click_consistency = %config.click_consistency,
        "starting tether"
    );

    let settings = config.service_settings();
    let generator = RandomGenerator::with_length(config.code_length);

    let links: Arc<dyn LinkService> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(LinkStoreService::with_settings(
            InMemoryStore::new(),
            generator,
            settings,
        )),
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis url is required when storage backend is redis")?;
            let store = RedisStore::connect(redis_url, config.redis_key_prefix.clone())
                .await
                .context("failed to connect to redis")?;
            Arc::new(LinkStoreService::with_settings(store, generator, settings))
        }
    };

    let state = AppState::new(links, config.public_base_url);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
