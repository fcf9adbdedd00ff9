use std::collections::HashSet;

use tracing::{debug, error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::{ProductClient, UserClient, PRICE_TOLERANCE};
use crate::domain::{Order, OrderCreate, OrderFilter, OrderLine, OrderStatus, PlaceOrder, Role};
use crate::order_actor::{OrderAction, OrderError};
use crate::product_actor::ProductError;

/// Client for interacting with the Order actor.
///
/// This client handles the orchestration around an order: the parties and
/// products are validated and stock is reserved before the order is stored.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    product_client: ProductClient,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

fn check_lines(lines: &[OrderLine]) -> Result<(), OrderError> {
    if lines.is_empty() {
        return Err(OrderError::ValidationError("order has no products".into()));
    }
    let mut seen = HashSet::new();
    for line in lines {
        if line.quantity == 0 {
            return Err(OrderError::ValidationError(format!(
                "quantity for {} must be at least 1",
                line.product_id
            )));
        }
        if !seen.insert(line.product_id.as_str()) {
            return Err(OrderError::ValidationError(format!(
                "{} appears more than once",
                line.product_id
            )));
        }
    }
    Ok(())
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            user_client,
            product_client,
        }
    }

    #[instrument(skip(self, order), fields(buyer_id = %order.buyer_id, seller_id = %order.seller_id))]
    pub async fn create_order(&self, order: PlaceOrder) -> Result<Order, OrderError> {
        info!("Processing create_order request (Client Side)");
        check_lines(&order.ordered_products)?;

        // Step 1: Validate both parties
        for (id, role) in [(&order.buyer_id, Role::Buyer), (&order.seller_id, Role::Seller)] {
            if let Err(e) = self.user_client.require_role(id.clone(), role).await {
                error!(error = %e, "User validation failed");
                return Err(OrderError::InvalidUser(e.to_string()));
            }
        }

        // Step 2: Validate products and price the order from current prices
        let mut total = 0.0;
        for line in &order.ordered_products {
            let product = match self.product_client.get_product(line.product_id.clone()).await {
                Ok(Some(product)) => product,
                Ok(None) => {
                    error!(product_id = %line.product_id, "Product not found");
                    return Err(OrderError::InvalidProduct(line.product_id.clone()));
                }
                Err(e) => {
                    error!(error = %e, "Product validation failed");
                    return Err(OrderError::InvalidProduct(format!(
                        "Product validation failed: {e}"
                    )));
                }
            };
            if product.seller_id != order.seller_id {
                return Err(OrderError::InvalidProduct(format!(
                    "{} is not sold by {}",
                    product.id, order.seller_id
                )));
            }
            total += product.price_per_unit * f64::from(line.quantity);
        }
        if let Some(claimed) = order.total_price {
            if (claimed - total).abs() > PRICE_TOLERANCE {
                return Err(OrderError::ValidationError(format!(
                    "total_price {claimed} does not match computed total {total}"
                )));
            }
        }

        // Step 3: Reserve stock line by line, undoing on the first failure
        let mut reserved: Vec<&OrderLine> = Vec::new();
        for line in &order.ordered_products {
            match self
                .product_client
                .reserve_stock(line.product_id.clone(), line.quantity)
                .await
            {
                Ok(remaining) => {
                    debug!(product_id = %line.product_id, remaining, "Stock reserved");
                    reserved.push(line);
                }
                Err(e) => {
                    error!(error = %e, "Stock reservation failed");
                    self.release(reserved).await;
                    return Err(match e {
                        ProductError::InsufficientStock { .. } => {
                            OrderError::InsufficientStock(format!("{}: {e}", line.product_id))
                        }
                        other => OrderError::InvalidProduct(other.to_string()),
                    });
                }
            }
        }
        info!("Stock reserved successfully");

        // Step 4: Store the order
        let payload = OrderCreate {
            buyer_id: order.buyer_id,
            seller_id: order.seller_id,
            ordered_products: order.ordered_products.clone(),
            total_price: total,
        };
        match self.inner.create(payload).await {
            Ok(created) => {
                info!(order_id = %created.id, total_price = created.total_price, "Order created");
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "Order creation failed, returning stock");
                self.release(order.ordered_products.iter().collect()).await;
                Err(e)
            }
        }
    }

    async fn release(&self, lines: Vec<&OrderLine>) {
        for line in lines {
            if let Err(e) = self
                .product_client
                .release_stock(line.product_id.clone(), line.quantity)
                .await
            {
                warn!(product_id = %line.product_id, error = %e, "Stock release failed");
            }
        }
    }

    /// Moves an order along its lifecycle. Cancelling puts the stock back.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: String, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self
            .inner
            .perform_action(id, OrderAction::Transition(status))
            .await?;
        if status == OrderStatus::Cancelled {
            self.release(order.ordered_products.iter().collect()).await;
        }
        info!(order_id = %order.id, status = %order.status, "Order status changed");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn orders_for_seller(
        &self,
        seller_id: String,
        filter: OrderFilter,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self
            .inner
            .list_where(move |o: &Order| o.seller_id == seller_id)
            .await?;
        self.apply_filter(orders, filter).await
    }

    #[instrument(skip(self))]
    pub async fn orders_for_buyer(
        &self,
        buyer_id: String,
        filter: OrderFilter,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self
            .inner
            .list_where(move |o: &Order| o.buyer_id == buyer_id)
            .await?;
        self.apply_filter(orders, filter).await
    }

    /// Search matches on buyer names, which live in the user actor.
    async fn apply_filter(&self, orders: Vec<Order>, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        let ids = orders.iter().map(|o| o.buyer_id.clone()).collect();
        let buyers = self
            .user_client
            .users_by_ids(ids)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        Ok(orders
            .into_iter()
            .filter(|o| {
                let name = buyers.get(&o.buyer_id).map_or("", |u| u.name.as_str());
                filter.matches(o, name)
            })
            .collect())
    }
}
