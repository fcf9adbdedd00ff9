use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{ApiResult, AppJson, AppQuery};
use crate::app_system::MarketClients;
use crate::domain::{Product, ProductCreate, ProductFilter, ProductPatch, Review};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/seller/{seller_id}", get(seller_products))
        .route("/products/{id}/reviews", get(product_reviews))
}

#[derive(Debug, Deserialize)]
struct Owner {
    seller_id: String,
}

async fn list_products(
    State(clients): State<MarketClients>,
    AppQuery(filter): AppQuery<ProductFilter>,
) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(clients.products.list_products(filter).await?))
}

async fn create_product(
    State(clients): State<MarketClients>,
    AppJson(payload): AppJson<ProductCreate>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = clients.products.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(State(clients): State<MarketClients>, Path(id): Path<String>) -> ApiResult<Json<Product>> {
    Ok(Json(clients.products.fetch_product(id).await?))
}

async fn update_product(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<ProductPatch>,
) -> ApiResult<Json<Product>> {
    Ok(Json(clients.products.update_product(id, patch).await?))
}

async fn delete_product(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(owner): AppQuery<Owner>,
) -> ApiResult<StatusCode> {
    clients.products.delete_product(id, owner.seller_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn seller_products(
    State(clients): State<MarketClients>,
    Path(seller_id): Path<String>,
) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(clients.products.products_of_seller(seller_id).await?))
}

async fn product_reviews(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Review>>> {
    Ok(Json(clients.reviews.for_product(id).await?))
}
