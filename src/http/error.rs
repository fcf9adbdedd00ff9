use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::cart_actor::CartError;
use crate::clients::{CheckoutError, ReportError};
use crate::complaint_actor::ComplaintError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::review_actor::ReviewError;
use crate::transaction_actor::TransactionError;
use crate::user_actor::UserError;

/// Every failure a handler can return, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    PaymentFailed(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::PaymentFailed(_) => StatusCode::PAYMENT_REQUIRED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        let message = e.to_string();
        match e {
            UserError::NotFound(_) => ApiError::NotFound(message),
            UserError::AlreadyExists(_) => ApiError::Conflict(message),
            UserError::WrongRole { .. } => ApiError::NotFound(message),
            UserError::ValidationError(_) => ApiError::BadRequest(message),
            UserError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        let message = e.to_string();
        match e {
            ProductError::NotFound(_) => ApiError::NotFound(message),
            ProductError::AlreadyExists(_) | ProductError::InsufficientStock { .. } => {
                ApiError::Conflict(message)
            }
            ProductError::InvalidQuantity(_)
            | ProductError::InvalidSeller(_)
            | ProductError::ValidationError(_) => ApiError::BadRequest(message),
            ProductError::NotOwner { .. } => ApiError::Forbidden(message),
            ProductError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let message = e.to_string();
        match e {
            OrderError::NotFound(_) => ApiError::NotFound(message),
            OrderError::AlreadyExists(_)
            | OrderError::InsufficientStock(_)
            | OrderError::InvalidTransition { .. } => ApiError::Conflict(message),
            OrderError::InvalidProduct(_)
            | OrderError::InvalidUser(_)
            | OrderError::ValidationError(_) => ApiError::BadRequest(message),
            OrderError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<TransactionError> for ApiError {
    fn from(e: TransactionError) -> Self {
        let message = e.to_string();
        match e {
            TransactionError::NotFound(_) => ApiError::NotFound(message),
            TransactionError::AlreadyExists(_) => ApiError::Conflict(message),
            TransactionError::InvalidOrder(_) | TransactionError::ValidationError(_) => {
                ApiError::BadRequest(message)
            }
            TransactionError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(e: ReviewError) -> Self {
        let message = e.to_string();
        match e {
            ReviewError::NotFound(_) | ReviewError::UnknownItem(_) => ApiError::NotFound(message),
            ReviewError::AlreadyExists(_) => ApiError::Conflict(message),
            ReviewError::NotEligible(_) | ReviewError::NotAuthor { .. } => {
                ApiError::Forbidden(message)
            }
            ReviewError::ValidationError(_) => ApiError::BadRequest(message),
            ReviewError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<ComplaintError> for ApiError {
    fn from(e: ComplaintError) -> Self {
        let message = e.to_string();
        match e {
            ComplaintError::NotFound(_) => ApiError::NotFound(message),
            ComplaintError::AlreadyExists(_) | ComplaintError::AlreadySettled(_) => {
                ApiError::Conflict(message)
            }
            ComplaintError::InvalidParty(_) | ComplaintError::ValidationError(_) => {
                ApiError::BadRequest(message)
            }
            ComplaintError::NotAccuser { .. } => ApiError::Forbidden(message),
            ComplaintError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        let message = e.to_string();
        match e {
            CartError::NotFound(_) => ApiError::NotFound(message),
            CartError::AlreadyExists(_) | CartError::InsufficientStock { .. } => {
                ApiError::Conflict(message)
            }
            CartError::InvalidProduct(_) | CartError::ValidationError(_) => {
                ApiError::BadRequest(message)
            }
            CartError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<CheckoutError> for ApiError {
    fn from(e: CheckoutError) -> Self {
        let message = e.to_string();
        match e {
            CheckoutError::InvalidCard(_) | CheckoutError::EmptyCheckout => {
                ApiError::BadRequest(message)
            }
            CheckoutError::PaymentFailed(_) => ApiError::PaymentFailed(message),
            CheckoutError::Cart(cart) => cart.into(),
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
