use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Card,
    CashOnDelivery,
    MobileBanking,
}

/// Settlement state of a payment. Older clients sent lowercase
/// `completed`/`pending`; both spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[serde(alias = "completed", alias = "COMPLETED", alias = "success")]
    Success,
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "failed")]
    Failed,
}

/// A payment recorded against one order. Buyer and seller details are copied
/// in at creation so history survives profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_id: String,
    pub order_id: String,
    pub amount: f64,
    pub payment_type: PaymentType,
    pub status: TransactionStatus,
    pub buyer_id: String,
    pub buyer_name: String,
    pub buyer_phone: Option<String>,
    pub seller_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What a caller submits to record a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordTransaction {
    pub order_id: String,
    pub amount: f64,
    pub payment_type: PaymentType,
    pub status: TransactionStatus,
}

/// Payload stored by the transaction actor, with the order's parties resolved.
#[derive(Debug, Clone)]
pub struct TransactionCreate {
    pub order_id: String,
    pub amount: f64,
    pub payment_type: PaymentType,
    pub status: TransactionStatus,
    pub buyer_id: String,
    pub buyer_name: String,
    pub buyer_phone: Option<String>,
    pub seller_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPatch {
    pub status: TransactionStatus,
}
