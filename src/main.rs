//! Sentigate HTTP server entrypoint.

use std::net::SocketAddr;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use sentigate::analysis::AnalysisOrchestrator;
use sentigate::cache::{MemoryCache, ResultStore};
use sentigate::config::Config;
use sentigate::gateway::{HandlerState, create_router_with_state};
use sentigate::limiter::RateLimiter;
use sentigate::model::{HttpModelAdapter, ModelAdapter};
use sentigate::normalize::TextNormalizer;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        model = %config.model_name,
        "sentigate starting"
    );

    let normalizer = TextNormalizer::new(config.max_text_len, config.normalize_lowercase);
    let limiter = RateLimiter::new(config.rate_quota, config.rate_window, config.max_clients);
    let cache = MemoryCache::new(config.cache_capacity);

    #[cfg(feature = "mock")]
    if std::env::var_os("SENTIGATE_MOCK_MODEL").is_some_and(|v| !v.is_empty()) {
        tracing::warn!("SENTIGATE_MOCK_MODEL set, serving canned scores");
        let adapter = sentigate::model::MockModelAdapter::new();
        let orchestrator =
            AnalysisOrchestrator::new(normalizer, limiter, cache, adapter, config.cache_ttl);
        return serve(addr, orchestrator).await;
    }

    let adapter = HttpModelAdapter::new(config.model_url.clone(), config.model_name.clone());
    let orchestrator =
        AnalysisOrchestrator::new(normalizer, limiter, cache, adapter, config.cache_ttl);
    serve(addr, orchestrator).await
}

async fn serve<M, C>(
    addr: SocketAddr,
    orchestrator: AnalysisOrchestrator<M, C>,
) -> anyhow::Result<()>
where
    M: ModelAdapter + 'static,
    C: ResultStore + 'static,
{
    let state = HandlerState::new(orchestrator);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("sentigate shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
