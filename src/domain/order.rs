use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of an order.
///
/// PENDING -> PROCESSING -> COMPLETED -> DELIVERED, and CANCELLED from
/// PENDING or PROCESSING.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Processing, Completed)
                | (Completed, Delivered)
                | (Pending, Cancelled)
                | (Processing, Cancelled)
        )
    }

    /// Buyers may review products from orders in these states.
    pub fn is_fulfilled(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Delivered)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Represents a buyer's order from a single seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub ordered_products: Vec<OrderLine>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.ordered_products
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }
}

/// What a buyer submits to place an order. `total_price` is what the buyer
/// saw in the cart; the stored total is always recomputed from unit prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub buyer_id: String,
    pub seller_id: String,
    pub ordered_products: Vec<OrderLine>,
    #[serde(default)]
    pub total_price: Option<f64>,
}

/// Priced, validated payload stored by the order actor.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub buyer_id: String,
    pub seller_id: String,
    pub ordered_products: Vec<OrderLine>,
    pub total_price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusChange {
    pub status: OrderStatus,
}
