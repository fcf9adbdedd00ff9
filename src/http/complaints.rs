use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use super::{ApiResult, AppJson, AppQuery};
use crate::app_system::MarketClients;
use crate::domain::{Complaint, ComplaintCreate, ComplaintFilter, ComplaintPatch, ComplaintResponse};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        // Buyers and sellers file through separate paths, the payload is the same
        .route("/complaints", post(file))
        .route("/complaints/seller", post(file))
        .route("/complaints/{id}", get(get_complaint).put(edit_complaint))
        .route("/complaints/{id}/respond", patch(respond))
        .route("/complaints/seller/{id}", get(filed_by))
        .route("/complaints/buyer/{id}", get(filed_by))
}

async fn file(
    State(clients): State<MarketClients>,
    AppJson(payload): AppJson<ComplaintCreate>,
) -> ApiResult<(StatusCode, Json<Complaint>)> {
    let complaint = clients.complaints.file(payload).await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

async fn get_complaint(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
) -> ApiResult<Json<Complaint>> {
    Ok(Json(clients.complaints.fetch_complaint(id).await?))
}

async fn edit_complaint(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(edit): AppJson<ComplaintPatch>,
) -> ApiResult<Json<Complaint>> {
    Ok(Json(clients.complaints.edit(id, edit).await?))
}

async fn respond(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(response): AppJson<ComplaintResponse>,
) -> ApiResult<Json<Complaint>> {
    Ok(Json(clients.complaints.respond(id, response).await?))
}

async fn filed_by(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(filter): AppQuery<ComplaintFilter>,
) -> ApiResult<Json<Vec<Complaint>>> {
    Ok(Json(clients.complaints.filed_by(id, filter).await?))
}
