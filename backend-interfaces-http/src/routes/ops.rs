use axum::routing::get;
use axum::Router;

use backend_application::ServiceState;

use crate::handlers::ops_handlers;

/// Routes every service exposes next to its own API.
pub fn ops_routes<S: ServiceState>() -> Router<S> {
    Router::new()
        .route("/", get(ops_handlers::redirect_to_docs::<S>))
        .route("/health/live", get(ops_handlers::health_live))
        .route("/health/ready", get(ops_handlers::health_ready::<S>))
        .route("/metrics", get(ops_handlers::metrics_prometheus::<S>))
}
