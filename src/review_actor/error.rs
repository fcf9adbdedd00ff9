use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),
    #[error("Review already exists: {0}")]
    AlreadyExists(String),
    #[error("Reviewed item not found: {0}")]
    UnknownItem(String),
    #[error("Review {review_id} was not written by {buyer_id}")]
    NotAuthor { review_id: String, buyer_id: String },
    #[error("Not eligible to review: {0}")]
    NotEligible(String),
    #[error("Review validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(ReviewError);
