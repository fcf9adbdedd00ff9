use std::collections::HashMap;

use indexmap::IndexSet;
use tracing::{debug, instrument};

use crate::clients::{OrderClient, ProductClient, TransactionClient, UserClient};
use crate::domain::{
    Order, OrderFilter, OrderStatus, PeopleFilter, Product, SalesReport, SalesRow,
    SellerOverview, TransactionFilter, TransactionReport, User,
};
use crate::order_actor::OrderError;
use crate::transaction_actor::TransactionError;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Report failed: {0}")]
pub struct ReportError(pub String);

macro_rules! report_error_from {
    ($($error:ty),*) => {
        $(impl From<$error> for ReportError {
            fn from(e: $error) -> Self {
                ReportError(e.to_string())
            }
        })*
    };
}

report_error_from!(
    OrderError,
    TransactionError,
    crate::user_actor::UserError,
    crate::product_actor::ProductError
);

/// Read-only views assembled from several actors.
#[derive(Clone)]
pub struct ReportClient {
    user_client: UserClient,
    product_client: ProductClient,
    order_client: OrderClient,
    transaction_client: TransactionClient,
}

fn revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total_price)
        .sum()
}

fn describe_lines(order: &Order, products: &HashMap<String, Product>) -> String {
    order
        .ordered_products
        .iter()
        .map(|line| {
            let name = products
                .get(&line.product_id)
                .map_or(line.product_id.as_str(), |p| p.name.as_str());
            format!("{name} ({})", line.quantity)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl ReportClient {
    pub fn new(
        user_client: UserClient,
        product_client: ProductClient,
        order_client: OrderClient,
        transaction_client: TransactionClient,
    ) -> Self {
        Self {
            user_client,
            product_client,
            order_client,
            transaction_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn sales_report(
        &self,
        seller_id: String,
        filter: OrderFilter,
    ) -> Result<SalesReport, ReportError> {
        debug!("Building report");
        let orders = self.order_client.orders_for_seller(seller_id.clone(), filter).await?;
        let products: HashMap<String, Product> = self
            .product_client
            .products_of_seller(seller_id)
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        let buyers = self
            .user_client
            .users_by_ids(orders.iter().map(|o| o.buyer_id.clone()).collect())
            .await?;

        let rows = orders
            .iter()
            .map(|order| SalesRow {
                order_id: order.id.clone(),
                buyer_name: buyers
                    .get(&order.buyer_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_default(),
                products: describe_lines(order, &products),
                total_price: order.total_price,
                status: order.status,
                date: order.created_at,
            })
            .collect();
        Ok(SalesReport {
            rows,
            total_orders: orders.len(),
            total_revenue: revenue(&orders),
        })
    }

    #[instrument(skip(self))]
    pub async fn transaction_report(
        &self,
        seller_id: String,
        filter: TransactionFilter,
    ) -> Result<TransactionReport, ReportError> {
        debug!("Building report");
        let transactions = self.transaction_client.for_seller(seller_id, filter).await?;
        Ok(transactions.into())
    }

    /// Revenue by buyer division, catalog size by division, stock by category.
    #[instrument(skip(self))]
    pub async fn seller_overview(&self, seller_id: String) -> Result<SellerOverview, ReportError> {
        debug!("Building report");
        let orders = self
            .order_client
            .orders_for_seller(seller_id.clone(), OrderFilter::default())
            .await?;
        let products = self.product_client.products_of_seller(seller_id).await?;
        let buyers = self
            .user_client
            .users_by_ids(orders.iter().map(|o| o.buyer_id.clone()).collect())
            .await?;

        let mut overview = SellerOverview::default();
        for order in orders.iter().filter(|o| o.status != OrderStatus::Cancelled) {
            let division = buyers.get(&order.buyer_id).and_then(|u| u.profile.division);
            if let Some(division) = division {
                *overview.revenue_by_division.entry(division).or_default() += order.total_price;
            }
        }
        for product in &products {
            *overview.products_by_division.entry(product.division).or_default() += 1;
            *overview.stock_by_category.entry(product.category).or_default() += product.stock;
        }
        Ok(overview)
    }

    /// Distinct buyers who have ordered from the seller, in first-order order.
    #[instrument(skip(self))]
    pub async fn seller_buyers(
        &self,
        seller_id: String,
        filter: PeopleFilter,
    ) -> Result<Vec<User>, ReportError> {
        debug!("Building report");
        let orders = self
            .order_client
            .orders_for_seller(seller_id, OrderFilter::default())
            .await?;
        let ids: IndexSet<String> = orders.into_iter().map(|o| o.buyer_id).collect();
        let mut users = self
            .user_client
            .users_by_ids(ids.iter().cloned().collect())
            .await?;
        Ok(ids
            .iter()
            .filter_map(|id| users.remove(id))
            .filter(|u| filter.matches(&u.name, &u.email))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderLine;
    use chrono::Utc;

    fn order(id: &str, total: f64, status: OrderStatus) -> Order {
        let now = Utc::now();
        Order {
            id: id.into(),
            buyer_id: "user_1".into(),
            seller_id: "user_2".into(),
            ordered_products: vec![OrderLine::new("product_1", 2), OrderLine::new("product_9", 1)],
            total_price: total,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_revenue_skips_cancelled() {
        let orders = vec![
            order("order_1", 100.0, OrderStatus::Delivered),
            order("order_2", 40.0, OrderStatus::Cancelled),
            order("order_3", 10.0, OrderStatus::Pending),
        ];
        assert_eq!(revenue(&orders), 110.0);
    }

    #[test]
    fn test_line_description_falls_back_to_id() {
        let mut products = HashMap::new();
        let now = Utc::now();
        products.insert(
            "product_1".to_string(),
            Product {
                id: "product_1".into(),
                seller_id: "user_2".into(),
                name: "Potato".into(),
                description: "Diamond potato".into(),
                category: crate::domain::Category::Vegetable,
                subcategory: "Vegetable".into(),
                price_per_unit: 30.0,
                unit: crate::domain::Unit::Kg,
                stock: 10,
                division: crate::domain::Division::Rangpur,
                image: None,
                created_at: now,
                updated_at: now,
            },
        );
        let text = describe_lines(&order("order_1", 60.0, OrderStatus::Pending), &products);
        assert_eq!(text, "Potato (2), product_9 (1)");
    }
}
