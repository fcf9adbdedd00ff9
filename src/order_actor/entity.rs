use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use super::{OrderAction, OrderError};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Patch = (); // Orders only change through status transitions
    type Action = OrderAction;
    type ActionResult = Order;
    type Error = OrderError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Order. Lines and pricing are checked by the order client
    /// before the payload reaches the actor; only shape is re-checked here.
    fn from_create(id: String, payload: OrderCreate) -> Result<Self, OrderError> {
        if payload.ordered_products.is_empty() {
            return Err(OrderError::ValidationError("order has no products".into()));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            buyer_id: payload.buyer_id,
            seller_id: payload.seller_id,
            ordered_products: payload.ordered_products,
            total_price: payload.total_price,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<Order, OrderError> {
        match action {
            OrderAction::Transition(next) => {
                if !self.status.can_transition_to(next) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
                self.updated_at = Utc::now();
                Ok(self.clone())
            }
        }
    }
}
