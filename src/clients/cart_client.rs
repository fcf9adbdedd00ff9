use tracing::{debug, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::cart_actor::{CartAction, CartError};
use crate::clients::ProductClient;
use crate::domain::{AddToCart, Cart, CartCreate, CartLine};
use crate::product_actor::ProductError;

/// Client for interacting with the Cart actor.
///
/// Carts are keyed by buyer id and created on first use.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    product_client: ProductClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, product_client: ProductClient) -> Self {
        Self {
            inner,
            product_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn cart(&self, buyer_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        if let Some(cart) = self.inner.get(buyer_id.clone()).await? {
            return Ok(cart);
        }
        match self.inner.create(CartCreate { buyer_id: buyer_id.clone() }).await {
            Ok(cart) => Ok(cart),
            // Someone else opened it between the get and the create
            Err(CartError::AlreadyExists(_)) => self.inner.fetch(buyer_id).await,
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, buyer_id: String, item: AddToCart) -> Result<Cart, CartError> {
        debug!("Sending request");
        if item.quantity == 0 {
            return Err(CartError::ValidationError("quantity must be at least 1".into()));
        }
        let product = match self.product_client.fetch_product(item.product_id.clone()).await {
            Ok(product) => product,
            Err(ProductError::NotFound(id)) => return Err(CartError::InvalidProduct(id)),
            Err(e) => return Err(CartError::ActorCommunicationError(e.to_string())),
        };
        let cart = self.cart(buyer_id.clone()).await?;
        let in_cart = cart
            .lines
            .iter()
            .find(|l| l.product_id == product.id)
            .map_or(0, |l| l.quantity);
        if in_cart + item.quantity > product.stock {
            warn!(product_id = %product.id, stock = product.stock, "Cart quantity exceeds stock");
            return Err(CartError::InsufficientStock {
                requested: in_cart + item.quantity,
                available: product.stock,
            });
        }
        let line = CartLine {
            product_id: product.id,
            seller_id: product.seller_id,
            quantity: item.quantity,
            price_per_unit: product.price_per_unit,
        };
        self.inner.perform_action(buyer_id, CartAction::Add(line)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, buyer_id: String, product_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(buyer_id, CartAction::Remove { product_id })
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, buyer_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.cart(buyer_id.clone()).await?;
        self.inner.perform_action(buyer_id, CartAction::Clear).await
    }
}
