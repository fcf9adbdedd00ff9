use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::{ApiResult, AppJson, AppQuery};
use crate::app_system::MarketClients;
use crate::domain::{PeopleFilter, Review, Role, SellerOverview, User, UserCreate, UserPatch};

pub fn routes() -> Router<MarketClients> {
    Router::new()
        .route("/buyers", get(list_buyers).post(register_buyer))
        .route("/sellers", get(list_sellers).post(register_seller))
        .route("/buyers/{id}", get(get_buyer).put(update_buyer))
        .route("/sellers/{id}", get(get_seller).put(update_seller))
        .route("/buyers/{id}/reviews", get(buyer_reviews))
        .route("/sellers/{id}/buyers", get(seller_buyers))
        .route("/sellers/{id}/overview", get(seller_overview))
}

async fn register(clients: &MarketClients, role: Role, payload: UserCreate) -> ApiResult<(StatusCode, Json<User>)> {
    let user = clients.users.register(role, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn register_buyer(
    State(clients): State<MarketClients>,
    AppJson(payload): AppJson<UserCreate>,
) -> ApiResult<(StatusCode, Json<User>)> {
    register(&clients, Role::Buyer, payload).await
}

async fn register_seller(
    State(clients): State<MarketClients>,
    AppJson(payload): AppJson<UserCreate>,
) -> ApiResult<(StatusCode, Json<User>)> {
    register(&clients, Role::Seller, payload).await
}

async fn list_buyers(
    State(clients): State<MarketClients>,
    AppQuery(filter): AppQuery<PeopleFilter>,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(clients.users.list_users(Role::Buyer, filter).await?))
}

async fn list_sellers(
    State(clients): State<MarketClients>,
    AppQuery(filter): AppQuery<PeopleFilter>,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(clients.users.list_users(Role::Seller, filter).await?))
}

async fn get_buyer(State(clients): State<MarketClients>, Path(id): Path<String>) -> ApiResult<Json<User>> {
    Ok(Json(clients.users.require_role(id, Role::Buyer).await?))
}

async fn get_seller(State(clients): State<MarketClients>, Path(id): Path<String>) -> ApiResult<Json<User>> {
    Ok(Json(clients.users.require_role(id, Role::Seller).await?))
}

async fn update(clients: &MarketClients, id: String, role: Role, patch: UserPatch) -> ApiResult<Json<User>> {
    clients.users.require_role(id.clone(), role).await?;
    Ok(Json(clients.users.update_user(id, patch).await?))
}

async fn update_buyer(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<UserPatch>,
) -> ApiResult<Json<User>> {
    update(&clients, id, Role::Buyer, patch).await
}

async fn update_seller(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<UserPatch>,
) -> ApiResult<Json<User>> {
    update(&clients, id, Role::Seller, patch).await
}

async fn buyer_reviews(State(clients): State<MarketClients>, Path(id): Path<String>) -> ApiResult<Json<Vec<Review>>> {
    Ok(Json(clients.reviews.for_buyer(id).await?))
}

async fn seller_buyers(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
    AppQuery(filter): AppQuery<PeopleFilter>,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(clients.reports.seller_buyers(id, filter).await?))
}

async fn seller_overview(
    State(clients): State<MarketClients>,
    Path(id): Path<String>,
) -> ApiResult<Json<SellerOverview>> {
    clients.users.require_role(id.clone(), Role::Seller).await?;
    Ok(Json(clients.reports.seller_overview(id).await?))
}
