use crate::domain::ComplaintResponse;

#[derive(Debug, Clone)]
pub enum ComplaintAction {
    /// Administrator settles a pending complaint.
    Respond(ComplaintResponse),
}
