use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use super::{ApiResult, AppJson};
use crate::app_system::MarketClients;
use crate::domain::{AddToCart, CartView};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/carts/{buyer_id}", get(get_cart).delete(clear_cart))
        .route("/carts/{buyer_id}/items", post(add_item))
        .route("/carts/{buyer_id}/items/{product_id}", delete(remove_item))
}

async fn get_cart(State(clients): State<MarketClients>, Path(buyer_id): Path<String>) -> ApiResult<Json<CartView>> {
    Ok(Json(clients.carts.cart(buyer_id).await?.into()))
}

async fn add_item(
    State(clients): State<MarketClients>,
    Path(buyer_id): Path<String>,
    AppJson(item): AppJson<AddToCart>,
) -> ApiResult<Json<CartView>> {
    Ok(Json(clients.carts.add_item(buyer_id, item).await?.into()))
}

async fn remove_item(
    State(clients): State<MarketClients>,
    Path((buyer_id, product_id)): Path<(String, String)>,
) -> ApiResult<Json<CartView>> {
    Ok(Json(clients.carts.remove_item(buyer_id, product_id).await?.into()))
}

async fn clear_cart(State(clients): State<MarketClients>, Path(buyer_id): Path<String>) -> ApiResult<Json<CartView>> {
    Ok(Json(clients.carts.clear(buyer_id).await?.into()))
}
