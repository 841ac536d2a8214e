use axum::routing::get;
use axum::Router;

use backend_application::OrderState;

use crate::handlers::order_handlers;
use crate::routes::ops_routes;

pub fn build_order_router(state: OrderState) -> Router {
    Router::new()
        .route(
            "/orders",
            get(order_handlers::list_orders).post(order_handlers::create_order),
        )
        .route(
            "/orders/",
            get(order_handlers::list_orders).post(order_handlers::create_order),
        )
        .route(
            "/orders/:id",
            get(order_handlers::get_order).delete(order_handlers::delete_order),
        )
        .merge(ops_routes::<OrderState>())
        .with_state(state)
}
