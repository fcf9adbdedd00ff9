use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use super::{ApiResult, AppJson, AppQuery};
use crate::app_system::MarketClients;
use crate::domain::{
    RecordTransaction, Transaction, TransactionFilter, TransactionPatch, TransactionReport,
};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/transactions", post(record))
        .route("/transactions/{id}", get(get_transaction))
        .route("/transactions/{id}/status", patch(change_status))
        .route("/transactions/seller/{id}", get(seller_transactions))
        .route("/transactions/buyer/{id}", get(buyer_transactions))
}

async fn record(
    State(clients): State<MarketClients>,
    AppJson(payload): AppJson<RecordTransaction>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let transaction = clients.transactions.record(payload).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

async fn get_transaction(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(clients.transactions.fetch_transaction(id).await?))
}

async fn change_status(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(change): AppJson<TransactionPatch>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(clients.transactions.update_status(id, change.status).await?))
}

/// Transactions plus a summary, as the seller dashboard shows them.
async fn seller_transactions(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(filter): AppQuery<TransactionFilter>,
) -> ApiResult<Json<TransactionReport>> {
    let transactions = clients.transactions.for_seller(id, filter).await?;
    Ok(Json(transactions.into()))
}

async fn buyer_transactions(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(filter): AppQuery<TransactionFilter>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(clients.transactions.for_buyer(id, filter).await?))
}
