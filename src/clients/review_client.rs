use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{Review, ReviewCreate, ReviewPatch};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::review_actor::ReviewError;

/// Client for interacting with the Review actor.
///
/// A buyer may review a product once per fulfilled order that contains it.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
    order_client: OrderClient,
    product_client: ProductClient,
}

impl_client_methods!(ReviewClient, Review, ReviewError, review);

impl ReviewClient {
    pub fn new(
        inner: ResourceClient<Review>,
        order_client: OrderClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            order_client,
            product_client,
        }
    }

    #[instrument(skip(self, payload), fields(order_id = %payload.order_id, product_id = %payload.product_id))]
    pub async fn submit(&self, payload: ReviewCreate) -> Result<Review, ReviewError> {
        debug!("Sending request");
        match self.product_client.fetch_product(payload.product_id.clone()).await {
            Ok(_) => {}
            Err(ProductError::NotFound(id)) => return Err(ReviewError::UnknownItem(id)),
            Err(e) => return Err(ReviewError::ActorCommunicationError(e.to_string())),
        }

        let order = match self.order_client.fetch_order(payload.order_id.clone()).await {
            Ok(order) => order,
            Err(OrderError::NotFound(id)) => return Err(ReviewError::UnknownItem(id)),
            Err(e) => return Err(ReviewError::ActorCommunicationError(e.to_string())),
        };
        if order.buyer_id != payload.buyer_id {
            return Err(ReviewError::NotEligible(format!(
                "{} was not placed by {}",
                order.id, payload.buyer_id
            )));
        }
        if order.quantity_of(&payload.product_id).is_none() {
            return Err(ReviewError::NotEligible(format!(
                "{} does not contain {}",
                order.id, payload.product_id
            )));
        }
        if !order.status.is_fulfilled() {
            return Err(ReviewError::NotEligible(format!(
                "{} is {}, reviews open once it is completed",
                order.id, order.status
            )));
        }

        let review = self.inner.create(payload).await?;
        info!(review_id = %review.id, rating = review.rating, "Review submitted");
        Ok(review)
    }

    #[instrument(skip(self, patch))]
    pub async fn edit(&self, id: String, patch: ReviewPatch) -> Result<Review, ReviewError> {
        debug!("Sending request");
        self.inner.update(id, patch).await
    }

    /// Deletes a review on behalf of its author.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: String, buyer_id: String) -> Result<(), ReviewError> {
        debug!("Sending request");
        self.inner.fetch(id.clone()).await?.ensure_author(&buyer_id)?;
        self.inner.delete(id.clone()).await?;
        info!(review_id = %id, "Review deleted");
        Ok(())
    }

    /// Newest first.
    #[instrument(skip(self))]
    pub async fn for_buyer(&self, buyer_id: String) -> Result<Vec<Review>, ReviewError> {
        debug!("Sending request");
        let mut reviews = self
            .inner
            .list_where(move |r: &Review| r.buyer_id == buyer_id)
            .await?;
        // Equal timestamps keep the later insert first
        reviews.reverse();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    #[instrument(skip(self))]
    pub async fn for_product(&self, product_id: String) -> Result<Vec<Review>, ReviewError> {
        debug!("Sending request");
        self.inner
            .list_where(move |r: &Review| r.product_id == product_id)
            .await
    }
}
