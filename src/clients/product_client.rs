use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::UserClient;
use crate::domain::{Product, ProductCreate, ProductFilter, ProductPatch, Role};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::user_actor::UserError;

/// Client for interacting with the Product actor.
///
/// Holds a [`UserClient`] so that only registered sellers can list products.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    user_client: UserClient,
}

impl_client_methods!(ProductClient, Product, ProductError, product);

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected result: {result:?}"))
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, user_client: UserClient) -> Self {
        Self { inner, user_client }
    }

    #[instrument(skip(self, payload), fields(seller_id = %payload.seller_id))]
    pub async fn create_product(&self, payload: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        match self
            .user_client
            .require_role(payload.seller_id.clone(), Role::Seller)
            .await
        {
            Ok(_) => {}
            Err(UserError::ActorCommunicationError(e)) => {
                return Err(ProductError::ActorCommunicationError(e))
            }
            Err(e) => return Err(ProductError::InvalidSeller(e.to_string())),
        }
        let product = self.inner.create(payload).await?;
        info!(product_id = %product.id, "Product listed");
        Ok(product)
    }

    /// Owner edit. The patch carries the acting seller's id.
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: String, seller_id: String) -> Result<(), ProductError> {
        debug!("Sending request");
        let product = self.inner.fetch(id.clone()).await?;
        if product.seller_id != seller_id {
            return Err(ProductError::NotOwner {
                product_id: id,
                seller_id,
            });
        }
        self.inner.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list_where(move |p: &Product| filter.matches(p)).await
    }

    #[instrument(skip(self))]
    pub async fn products_of_seller(&self, seller_id: String) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .list_where(move |p: &Product| p.seller_id == seller_id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::StockLevel(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Takes `quantity` out of stock, returning what remains.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: String, quantity: u32) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await?
        {
            ProductActionResult::Reserved { remaining } => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: String, quantity: u32) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReleaseStock(quantity))
            .await?
        {
            ProductActionResult::Released { available } => Ok(available),
            other => Err(unexpected(other)),
        }
    }
}
