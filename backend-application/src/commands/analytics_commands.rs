use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use backend_domain::{parse_iso8601, AnalyticsEvent, TrackEventRequest, TrackReceipt};

use crate::{AnalyticsState, AppError};

pub async fn track_event(
    state: &AnalyticsState,
    request: TrackEventRequest,
) -> Result<TrackReceipt, AppError> {
    let timestamp = resolve_timestamp(&request.timestamp, Utc::now());
    let event = AnalyticsEvent::new(request, timestamp);
    let kind = event.kind();

    state
        .event_repo
        .insert_event(&event)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "store analytics event", err))?;

    state.metrics.record_success();
    state.metrics.record_tracked(kind);
    debug!(event_id = %event.id, event_type = %kind, path = %event.path, "analytics event stored");
    Ok(TrackReceipt::success(kind))
}

/// Seconds range a ClickHouse `DateTime` column can hold.
const DATETIME_RANGE: std::ops::RangeInclusive<i64> = 0..=u32::MAX as i64;

/// Falls back to `now` when the client timestamp is unreadable or outside
/// what the events tables can store.
fn resolve_timestamp(raw: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match parse_iso8601(raw) {
        Some(parsed) if DATETIME_RANGE.contains(&parsed.timestamp()) => parsed,
        Some(_) => {
            warn!("event timestamp '{}' out of storable range, using current time", raw);
            now
        }
        None => {
            warn!("invalid event timestamp '{}', using current time", raw);
            now
        }
    }
}
