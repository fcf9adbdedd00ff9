use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use super::{ApiResult, AppJson, AppQuery};
use crate::app_system::MarketClients;
use crate::domain::{Order, OrderFilter, PlaceOrder, StatusChange};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/status", patch(change_status))
        .route("/orders/seller/{id}", get(seller_orders))
        .route("/orders/buyer/{id}", get(buyer_orders))
}

async fn create_order(
    State(clients): State<MarketClients>,
    AppJson(order): AppJson<PlaceOrder>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let order = clients.orders.create_order(order).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn get_order(State(clients): State<MarketClients>, Path(id): Path<String>) -> ApiResult<Json<Order>> {
    Ok(Json(clients.orders.fetch_order(id).await?))
}

async fn change_status(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(change): AppJson<StatusChange>,
) -> ApiResult<Json<Order>> {
    Ok(Json(clients.orders.update_status(id, change.status).await?))
}

async fn seller_orders(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(filter): AppQuery<OrderFilter>,
) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(clients.orders.orders_for_seller(id, filter).await?))
}

async fn buyer_orders(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(filter): AppQuery<OrderFilter>,
) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(clients.orders.orders_for_buyer(id, filter).await?))
}
