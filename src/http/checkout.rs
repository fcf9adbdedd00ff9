use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};

use super::{ApiResult, AppJson};
use crate::app_system::MarketClients;
use crate::domain::{CartCheckout, CheckoutReceipt, CheckoutRequest};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/carts/{buyer_id}/checkout", post(checkout_cart))
}

async fn checkout(
    State(clients): State<MarketClients>,
    AppJson(request): AppJson<CheckoutRequest>,
) -> ApiResult<Json<CheckoutReceipt>> {
    Ok(Json(clients.checkout.checkout(request).await?))
}

async fn checkout_cart(
    State(clients): State<MarketClients>,
    Path(buyer_id): Path<String>,
    AppJson(request): AppJson<CartCheckout>,
) -> ApiResult<Json<CheckoutReceipt>> {
    Ok(Json(clients.checkout.checkout_cart(buyer_id, request.card).await?))
}
