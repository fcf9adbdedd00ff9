use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::{OrderClient, UserClient, PRICE_TOLERANCE};
use crate::domain::{
    Order, OrderStatus, PaymentType, RecordTransaction, Transaction, TransactionCreate,
    TransactionFilter, TransactionPatch, TransactionStatus,
};
use crate::order_actor::OrderError;
use crate::transaction_actor::TransactionError;

/// Client for interacting with the Transaction actor.
#[derive(Clone)]
pub struct TransactionClient {
    inner: ResourceClient<Transaction>,
    user_client: UserClient,
    order_client: OrderClient,
}

impl_client_methods!(TransactionClient, Transaction, TransactionError, transaction);

impl TransactionClient {
    pub fn new(
        inner: ResourceClient<Transaction>,
        user_client: UserClient,
        order_client: OrderClient,
    ) -> Self {
        Self {
            inner,
            user_client,
            order_client,
        }
    }

    /// Records a payment against an existing order.
    #[instrument(skip(self, payload), fields(order_id = %payload.order_id))]
    pub async fn record(&self, payload: RecordTransaction) -> Result<Transaction, TransactionError> {
        debug!("Sending request");
        let order = match self.order_client.fetch_order(payload.order_id.clone()).await {
            Ok(order) => order,
            Err(OrderError::NotFound(id)) => return Err(TransactionError::InvalidOrder(id)),
            Err(e) => return Err(TransactionError::ActorCommunicationError(e.to_string())),
        };
        if order.status == OrderStatus::Cancelled {
            return Err(TransactionError::InvalidOrder(format!("{} is cancelled", order.id)));
        }
        if (order.total_price - payload.amount).abs() > PRICE_TOLERANCE {
            return Err(TransactionError::ValidationError(format!(
                "amount {} does not match order total {}",
                payload.amount, order.total_price
            )));
        }
        self.record_for(&order, payload.payment_type, payload.status).await
    }

    /// Records a payment for an order already in hand; the amount is the order total.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn record_for(
        &self,
        order: &Order,
        payment_type: PaymentType,
        status: TransactionStatus,
    ) -> Result<Transaction, TransactionError> {
        debug!("Sending request");
        let buyer = self
            .user_client
            .get_user(order.buyer_id.clone())
            .await
            .map_err(|e| TransactionError::ActorCommunicationError(e.to_string()))?;
        let (buyer_name, buyer_phone) = match buyer {
            Some(buyer) => (buyer.name, buyer.profile.phone),
            None => (String::new(), None),
        };
        let payload = TransactionCreate {
            order_id: order.id.clone(),
            amount: order.total_price,
            payment_type,
            status,
            buyer_id: order.buyer_id.clone(),
            buyer_name,
            buyer_phone,
            seller_id: order.seller_id.clone(),
        };
        let transaction = self.inner.create(payload).await?;
        info!(transaction_id = %transaction.transaction_id, amount = transaction.amount, "Transaction recorded");
        Ok(transaction)
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: String,
        status: TransactionStatus,
    ) -> Result<Transaction, TransactionError> {
        debug!("Sending request");
        self.inner.update(id, TransactionPatch { status }).await
    }

    #[instrument(skip(self))]
    pub async fn for_seller(
        &self,
        seller_id: String,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, TransactionError> {
        debug!("Sending request");
        self.inner
            .list_where(move |t: &Transaction| t.seller_id == seller_id && filter.matches(t))
            .await
    }

    #[instrument(skip(self))]
    pub async fn for_buyer(
        &self,
        buyer_id: String,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, TransactionError> {
        debug!("Sending request");
        self.inner
            .list_where(move |t: &Transaction| t.buyer_id == buyer_id && filter.matches(t))
            .await
    }
}
