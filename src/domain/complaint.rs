use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Pending,
    Resolved,
    Rejected,
}

/// A dispute filed by one party (`accuser_id`) against another
/// (`complainant_id`), settled by an administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub accuser_id: String,
    pub complainant_id: String,
    pub message: String,
    pub image: Option<String>,
    pub status: ComplaintStatus,
    pub admin_response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintCreate {
    pub accuser_id: String,
    pub complainant_id: String,
    pub message: String,
    pub image: Option<String>,
}

/// Edits allowed while the complaint is still pending. `accuser_id` names
/// the party making the change and must match the filer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintPatch {
    pub accuser_id: String,
    pub message: Option<String>,
    pub image: Option<String>,
}

/// Administrator decision on a pending complaint.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplaintResponse {
    pub status: ComplaintStatus,
    pub admin_response: Option<String>,
}
