use axum::routing::post;
use axum::Router;

use backend_application::AnalyticsState;

use crate::handlers::analytics_handlers;
use crate::routes::ops_routes;

pub fn build_analytics_router(state: AnalyticsState) -> Router {
    Router::new()
        .route("/track", post(analytics_handlers::track_event))
        .route("/track/", post(analytics_handlers::track_event))
        .merge(ops_routes::<AnalyticsState>())
        .with_state(state)
}
