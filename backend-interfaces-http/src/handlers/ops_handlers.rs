use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect};
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::ServiceState;

pub async fn redirect_to_docs<S: ServiceState>(State(state): State<S>) -> Redirect {
    Redirect::temporary(&state.config().docs_url)
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn health_ready<S: ServiceState>(State(state): State<S>) -> StatusCode {
    let timeout_secs = state.config().request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);
    match timeout(timeout_duration, state.storage().ping()).await {
        Ok(Ok(_)) => StatusCode::OK,
        Ok(Err(err)) => {
            error!("ready check failed: {:#}", err);
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn metrics_prometheus<S: ServiceState>(State(state): State<S>) -> impl IntoResponse {
    let payload = state.render_metrics();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload)
}
