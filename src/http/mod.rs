//! REST surface under `/api`.
//!
//! Handlers are thin: they extract, call one client method and map the
//! result. All failures go through [`ApiError`].

mod carts;
mod checkout;
mod complaints;
mod error;
mod orders;
mod products;
mod reports;
mod reviews;
mod transactions;
mod users;

use std::time::Duration;

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::app_system::MarketClients;
use crate::config::Config;

pub use error::ApiError;

/// JSON body extractor whose rejections render as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor whose rejections render as [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

pub type ApiResult<T> = Result<T, ApiError>;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors(config: &Config) -> CorsLayer {
    let origin = match config.cors_origin.as_deref().map(HeaderValue::from_str) {
        None => AllowOrigin::any(),
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            warn!(error = %e, "CORS_ORIGIN is not a valid header value, allowing any origin");
            AllowOrigin::any()
        }
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}

pub fn router(clients: MarketClients, config: &Config) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(users::routes())
        .merge(products::routes())
        .merge(orders::routes())
        .merge(transactions::routes())
        .merge(reviews::routes())
        .merge(complaints::routes())
        .merge(carts::routes())
        .merge(checkout::routes())
        .merge(reports::routes());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors(config))
        .with_state(clients)
}
