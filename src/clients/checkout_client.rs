use futures::future::join_all;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::cart_actor::CartError;
use crate::clients::{CartClient, OrderClient, TransactionClient};
use crate::domain::{
    CardDetails, CardError, CheckoutReceipt, CheckoutRequest, Order, PaymentType, PlaceOrder,
    TransactionStatus,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error(transparent)]
    InvalidCard(#[from] CardError),
    #[error("Nothing to check out")]
    EmptyCheckout,
    #[error("Payment failed: {0}")]
    PaymentFailed(String),
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Pays for one or more orders in two phases: create every order, then
/// record a card transaction for each.
///
/// Both phases fan out concurrently. There is no rollback: orders created
/// before a failure stay in place and are reported in the logs.
#[derive(Clone)]
pub struct CheckoutClient {
    order_client: OrderClient,
    transaction_client: TransactionClient,
    cart_client: CartClient,
}

impl CheckoutClient {
    pub fn new(
        order_client: OrderClient,
        transaction_client: TransactionClient,
        cart_client: CartClient,
    ) -> Self {
        Self {
            order_client,
            transaction_client,
            cart_client,
        }
    }

    #[instrument(skip(self, request), fields(orders = request.orders.len()))]
    pub async fn checkout(&self, request: CheckoutRequest) -> Result<CheckoutReceipt, CheckoutError> {
        request.card.validate()?;
        self.pay(request.orders).await
    }

    /// Checks out the buyer's cart as one order per seller, then empties it.
    #[instrument(skip(self, card))]
    pub async fn checkout_cart(
        &self,
        buyer_id: String,
        card: CardDetails,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        card.validate()?;
        let cart = self.cart_client.cart(buyer_id.clone()).await?;
        let receipt = self.pay(cart.seller_groups()).await?;
        self.cart_client.clear(buyer_id).await?;
        Ok(receipt)
    }

    async fn pay(&self, orders: Vec<PlaceOrder>) -> Result<CheckoutReceipt, CheckoutError> {
        if orders.is_empty() {
            return Err(CheckoutError::EmptyCheckout);
        }

        // Phase 1: orders
        let results = join_all(orders.into_iter().map(|o| self.order_client.create_order(o))).await;
        let mut created: Vec<Order> = Vec::with_capacity(results.len());
        let mut first_failure = None;
        for result in results {
            match result {
                Ok(order) => created.push(order),
                Err(e) => {
                    error!(error = %e, "Order creation failed during checkout");
                    if first_failure.is_none() {
                        first_failure = Some(e.to_string());
                    }
                }
            }
        }
        if let Some(message) = first_failure {
            return Err(abandon(&created, &[], message));
        }

        // Phase 2: one card payment per order
        let results = join_all(created.iter().map(|order| {
            self.transaction_client
                .record_for(order, PaymentType::Card, TransactionStatus::Success)
        }))
        .await;
        let mut transaction_ids = Vec::with_capacity(results.len());
        let mut first_failure = None;
        for result in results {
            match result {
                Ok(transaction) => transaction_ids.push(transaction.id),
                Err(e) => {
                    error!(error = %e, "Transaction failed during checkout");
                    if first_failure.is_none() {
                        first_failure = Some(e.to_string());
                    }
                }
            }
        }
        if let Some(message) = first_failure {
            return Err(abandon(&created, &transaction_ids, message));
        }

        let receipt = CheckoutReceipt {
            order_ids: created.iter().map(|o| o.id.clone()).collect(),
            transaction_ids,
            total_amount: created.iter().map(|o| o.total_price).sum(),
        };
        info!(
            orders = receipt.order_ids.len(),
            total_amount = receipt.total_amount,
            "Checkout complete"
        );
        Ok(receipt)
    }
}

/// Documents created before the failure are left in place.
fn abandon(orders: &[Order], transaction_ids: &[String], message: String) -> CheckoutError {
    if !orders.is_empty() {
        let order_ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        warn!(?order_ids, ?transaction_ids, "Checkout failed after partial writes");
    }
    CheckoutError::PaymentFailed(message)
}
