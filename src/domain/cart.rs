use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{OrderLine, PlaceOrder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub seller_id: String,
    pub quantity: u32,
    pub price_per_unit: f64,
}

/// A buyer's basket. Keyed by the buyer's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub buyer_id: String,
    pub lines: Vec<CartLine>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Sum of the lines at the prices seen when they were added.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price_per_unit * f64::from(line.quantity))
            .sum()
    }

    /// One order per seller, sellers in the order their first line was added.
    pub fn seller_groups(&self) -> Vec<PlaceOrder> {
        let mut groups: IndexMap<&str, Vec<&CartLine>> = IndexMap::new();
        for line in &self.lines {
            groups.entry(line.seller_id.as_str()).or_default().push(line);
        }
        groups
            .into_iter()
            .map(|(seller_id, lines)| PlaceOrder {
                buyer_id: self.buyer_id.clone(),
                seller_id: seller_id.to_string(),
                // Priced at order time; cart prices can go stale
                total_price: None,
                ordered_products: lines
                    .into_iter()
                    .map(|l| OrderLine::new(l.product_id.clone(), l.quantity))
                    .collect(),
            })
            .collect()
    }
}

/// Cart as returned by the cart routes, with its running total.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    #[serde(flatten)]
    pub cart: Cart,
    pub total: f64,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        let total = cart.total();
        Self { cart, total }
    }
}

#[derive(Debug, Clone)]
pub struct CartCreate {
    pub buyer_id: String,
}

/// Body of `POST /carts/{buyer_id}/items`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCart {
    pub product_id: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product: &str, seller: &str, quantity: u32, price: f64) -> CartLine {
        CartLine {
            product_id: product.into(),
            seller_id: seller.into(),
            quantity,
            price_per_unit: price,
        }
    }

    #[test]
    fn test_seller_groups_split_by_seller() {
        let cart = Cart {
            buyer_id: "user_1".into(),
            lines: vec![
                line("product_1", "user_2", 2, 10.0),
                line("product_2", "user_3", 1, 5.5),
                line("product_3", "user_2", 3, 1.0),
            ],
            updated_at: Utc::now(),
        };

        let groups = cart.seller_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].seller_id, "user_2");
        assert_eq!(groups[0].ordered_products.len(), 2);
        assert_eq!(groups[0].total_price, None);
        assert_eq!(groups[1].seller_id, "user_3");
        assert_eq!(groups[1].ordered_products, vec![OrderLine::new("product_2", 1)]);
        assert!((cart.total() - 28.5).abs() < f64::EPSILON);
    }
}
