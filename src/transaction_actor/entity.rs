use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Transaction, TransactionCreate, TransactionPatch};
use super::TransactionError;

impl Entity for Transaction {
    type Id = String;
    type CreatePayload = TransactionCreate;
    type Patch = TransactionPatch;
    type Action = ();
    type ActionResult = ();
    type Error = TransactionError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, payload: TransactionCreate) -> Result<Self, TransactionError> {
        if !payload.amount.is_finite() || payload.amount <= 0.0 {
            return Err(TransactionError::ValidationError(format!(
                "amount must be positive, got {}",
                payload.amount
            )));
        }
        let now = Utc::now();
        // Receipt number shown to people: date plus the store sequence
        let sequence = id.rsplit('_').next().unwrap_or(&id);
        let transaction_id = format!("TXN-{}-{:0>6}", now.format("%Y%m%d"), sequence);
        Ok(Self {
            transaction_id,
            id,
            order_id: payload.order_id,
            amount: payload.amount,
            payment_type: payload.payment_type,
            status: payload.status,
            buyer_id: payload.buyer_id,
            buyer_name: payload.buyer_name,
            buyer_phone: payload.buyer_phone,
            seller_id: payload.seller_id,
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, patch: TransactionPatch) -> Result<(), TransactionError> {
        self.status = patch.status;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), TransactionError> {
        Ok(())
    }
}
