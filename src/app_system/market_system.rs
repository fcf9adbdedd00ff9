use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{
    CartClient, CheckoutClient, ComplaintClient, OrderClient, ProductClient, ReportClient,
    ReviewClient, TransactionClient, UserClient,
};
use crate::domain::{Cart, Complaint, Order, Product, Review, Transaction, User};

/// Every client the HTTP layer needs, cheap to clone into handler state.
#[derive(Clone)]
pub struct MarketClients {
    pub users: UserClient,
    pub products: ProductClient,
    pub orders: OrderClient,
    pub transactions: TransactionClient,
    pub reviews: ReviewClient,
    pub complaints: ComplaintClient,
    pub carts: CartClient,
    pub checkout: CheckoutClient,
    pub reports: ReportClient,
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct MarketSystem {
    pub clients: MarketClients,
    handles: Vec<JoinHandle<()>>,
}

/// Ids of the form `<prefix>_<n>`, counting from 1 per store.
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{prefix}_{}", counter.fetch_add(1, Ordering::SeqCst))
}

fn spawn<T: Entity<Id = String>>(
    name: &'static str,
    prefix: &'static str,
    buffer_size: usize,
    handles: &mut Vec<JoinHandle<()>>,
) -> ResourceClient<T> {
    let (actor, client) = ResourceActor::<T>::new(name, buffer_size, sequential_ids(prefix));
    handles.push(tokio::spawn(actor.run()));
    client
}

impl MarketSystem {
    pub fn new(buffer_size: usize) -> Self {
        info!(buffer_size, "Starting market system");
        let mut handles = Vec::new();

        let users = UserClient::new(spawn::<User>("users", "user", buffer_size, &mut handles));
        let products = ProductClient::new(
            spawn::<Product>("products", "product", buffer_size, &mut handles),
            users.clone(),
        );
        let orders = OrderClient::new(
            spawn::<Order>("orders", "order", buffer_size, &mut handles),
            users.clone(),
            products.clone(),
        );
        let transactions = TransactionClient::new(
            spawn::<Transaction>("transactions", "transaction", buffer_size, &mut handles),
            users.clone(),
            orders.clone(),
        );
        let reviews = ReviewClient::new(
            spawn::<Review>("reviews", "review", buffer_size, &mut handles),
            orders.clone(),
            products.clone(),
        );
        let complaints = ComplaintClient::new(
            spawn::<Complaint>("complaints", "complaint", buffer_size, &mut handles),
            users.clone(),
        );
        // Carts are keyed by buyer id, the generator is never consulted
        let carts = CartClient::new(
            spawn::<Cart>("carts", "cart", buffer_size, &mut handles),
            products.clone(),
        );
        let checkout = CheckoutClient::new(orders.clone(), transactions.clone(), carts.clone());
        let reports = ReportClient::new(
            users.clone(),
            products.clone(),
            orders.clone(),
            transactions.clone(),
        );

        Self {
            clients: MarketClients {
                users,
                products,
                orders,
                transactions,
                reviews,
                complaints,
                carts,
                checkout,
                reports,
            },
            handles,
        }
    }

    /// Drops the clients, closing every actor's inbox, then waits for the actors.
    ///
    /// Clones handed out elsewhere (router state) must be dropped first or
    /// the corresponding actors keep running.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.clients);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, UserCreate};

    #[tokio::test]
    async fn test_ids_are_prefixed_and_shutdown_joins_actors() {
        let system = MarketSystem::new(8);
        let user = system
            .clients
            .users
            .register(Role::Seller, UserCreate::new(Role::Seller, "Karim", "karim@example.com"))
            .await
            .unwrap();
        assert_eq!(user.id, "user_1");

        assert_eq!(system.shutdown().await, Ok(()));
    }
}
