use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{ApiResult, AppJson, AppQuery};
use crate::app_system::MarketClients;
use crate::domain::{Review, ReviewCreate, ReviewPatch};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/reviews", post(submit))
        .route(
            "/reviews/{id}",
            get(get_review).put(edit_review).delete(delete_review),
        )
}

async fn submit(
    State(clients): State<MarketClients>,
    AppJson(payload): AppJson<ReviewCreate>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let review = clients.reviews.submit(payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

async fn get_review(State(clients): State<MarketClients>, Path(id): Path<String>) -> ApiResult<Json<Review>> {
    Ok(Json(clients.reviews.fetch_review(id).await?))
}

async fn edit_review(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<ReviewPatch>,
) -> ApiResult<Json<Review>> {
    Ok(Json(clients.reviews.edit(id, patch).await?))
}

#[derive(Debug, Deserialize)]
struct Author {
    buyer_id: String,
}

async fn delete_review(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(author): AppQuery<Author>,
) -> ApiResult<StatusCode> {
    clients.reviews.remove(id, author.buyer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
