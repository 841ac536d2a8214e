use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::analytics_commands;
use backend_application::AnalyticsState;
use backend_domain::{TrackEventRequest, TrackReceipt};

use crate::error::HttpError;
use crate::middleware::parse_payload;

pub async fn track_event(
    State(state): State<AnalyticsState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TrackReceipt>, HttpError> {
    let request: TrackEventRequest =
        parse_payload(&state.metrics, &headers, &body, state.config.max_body_bytes)?;
    let receipt = analytics_commands::track_event(&state, request).await?;
    Ok(Json(receipt))
}
