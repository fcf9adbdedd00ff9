use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A buyer's rating of one product from one fulfilled order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub buyer_id: String,
    pub product_id: String,
    pub order_id: String,
    pub rating: u8,
    pub comment: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub buyer_id: String,
    pub product_id: String,
    pub order_id: String,
    pub rating: u8,
    pub comment: String,
    pub image: Option<String>,
}

/// Edit by the review's author. `buyer_id` must match the stored review.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPatch {
    pub buyer_id: String,
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub image: Option<String>,
}
