use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransactionError {
    #[error("Transaction not found: {0}")]
    NotFound(String),
    #[error("Transaction already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("Transaction validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(TransactionError);
