use backend_domain::Order;

use crate::{AppError, OrderState};

pub async fn list_orders(state: &OrderState) -> Result<Vec<Order>, AppError> {
    let orders = state
        .order_repo
        .list_all()
        .await
        .map_err(|err| AppError::storage(&state.metrics, "list orders", err))?;
    state.metrics.record_success();
    Ok(orders)
}

pub async fn get_order(state: &OrderState, id: i64) -> Result<Order, AppError> {
    let order = state
        .order_repo
        .get_by_id(id)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "fetch order", err))?
        .ok_or_else(|| AppError::not_found(&state.metrics, "Order", id))?;
    state.metrics.record_success();
    Ok(order)
}
