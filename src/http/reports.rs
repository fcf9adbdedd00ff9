use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::{ApiResult, AppQuery};
use crate::app_system::MarketClients;
use crate::domain::{OrderFilter, SalesReport, TransactionFilter, TransactionReport};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/reports/sales/{seller_id}", get(sales))
        .route("/reports/transactions/{seller_id}", get(transactions))
}

async fn sales(
    State(clients): State<MarketClients>,
    Path(seller_id): Path<String>,
    AppQuery(filter): AppQuery<OrderFilter>,
) -> ApiResult<Json<SalesReport>> {
    Ok(Json(clients.reports.sales_report(seller_id, filter).await?))
}

async fn transactions(
    State(clients): State<MarketClients>,
    Path(seller_id): Path<String>,
    AppQuery(filter): AppQuery<TransactionFilter>,
) -> ApiResult<Json<TransactionReport>> {
    Ok(Json(clients.reports.transaction_report(seller_id, filter).await?))
}
