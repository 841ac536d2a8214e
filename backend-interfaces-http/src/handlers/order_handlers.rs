use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::order_commands;
use backend_application::queries::order_queries;
use backend_application::OrderState;
use backend_domain::{Order, OrderDraft};

use crate::error::HttpError;
use crate::middleware::parse_payload;

pub async fn create_order(
    State(state): State<OrderState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), HttpError> {
    let draft: OrderDraft =
        parse_payload(&state.metrics, &headers, &body, state.config.max_body_bytes)?;
    let order = order_commands::create_order(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn list_orders(State(state): State<OrderState>) -> Result<Json<Vec<Order>>, HttpError> {
    let orders = order_queries::list_orders(&state).await?;
    Ok(Json(orders))
}

pub async fn get_order(
    State(state): State<OrderState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Order>, HttpError> {
    let Path(id) = id?;
    let order = order_queries::get_order(&state, id).await?;
    Ok(Json(order))
}

pub async fn delete_order(
    State(state): State<OrderState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Order>, HttpError> {
    let Path(id) = id?;
    let order = order_commands::delete_order(&state, id).await?;
    Ok(Json(order))
}
