use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use backend_domain::RuntimeConfig;
use backend_infrastructure::ServiceKind;
use backend_interfaces_http::{build_analytics_router, build_game_router, build_order_router};

use crate::context::{build_analytics_state, build_game_state, build_order_state};

pub fn with_layers(router: Router, config: &RuntimeConfig) -> Router {
    router
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(
            usize::try_from(config.max_body_bytes).unwrap_or(usize::MAX),
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

async fn serve(service: ServiceKind, router: Router, config: &RuntimeConfig) -> Result<()> {
    let app = with_layers(router, config);
    let addr: std::net::SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind_addr '{}'", config.bind_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("{} service listening on {}", service.name(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("{} service stopped", service.name());
    Ok(())
}

pub async fn run_analytics() -> Result<()> {
    let state = build_analytics_state().await?;
    let config = state.config.clone();
    serve(ServiceKind::Analytics, build_analytics_router(state), &config).await
}

pub async fn run_games() -> Result<()> {
    let state = build_game_state().await?;
    let config = state.config.clone();
    serve(ServiceKind::Games, build_game_router(state), &config).await
}

pub async fn run_orders() -> Result<()> {
    let state = build_order_state().await?;
    let config = state.config.clone();
    serve(ServiceKind::Orders, build_order_router(state), &config).await
}

/// Entry point shared by the three binaries.
pub async fn launch(service: ServiceKind) -> Result<()> {
    let result = match service {
        ServiceKind::Analytics => run_analytics().await,
        ServiceKind::Games => run_games().await,
        ServiceKind::Orders => run_orders().await,
    };
    if let Err(err) = &result {
        error!("{} service failed: {:#}", service.name(), err);
    }
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
