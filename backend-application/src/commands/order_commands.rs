use tracing::info;

use backend_domain::{Order, OrderDraft};

use crate::{AppError, OrderState};

pub async fn create_order(state: &OrderState, draft: OrderDraft) -> Result<Order, AppError> {
    let order = state
        .order_repo
        .create(&draft)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "create order", err))?;
    state.metrics.record_success();
    info!(
        order_id = order.id,
        customer = %order.customer_name,
        status = %order.status,
        "order created"
    );
    Ok(order)
}

pub async fn delete_order(state: &OrderState, id: i64) -> Result<Order, AppError> {
    let order = state
        .order_repo
        .delete_by_id(id)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "delete order", err))?
        .ok_or_else(|| AppError::not_found(&state.metrics, "Order", id))?;
    state.metrics.record_success();
    info!(order_id = order.id, "order deleted");
    Ok(order)
}
