use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComplaintError {
    #[error("Complaint not found: {0}")]
    NotFound(String),
    #[error("Complaint already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid party: {0}")]
    InvalidParty(String),
    #[error("Complaint {complaint_id} was not filed by {accuser_id}")]
    NotAccuser { complaint_id: String, accuser_id: String },
    #[error("Complaint {0} has already been settled")]
    AlreadySettled(String),
    #[error("Complaint validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(ComplaintError);
