use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Division;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Vegetable,
    Fruit,
    Grannary,
    Fish,
    Pesticide,
    Fertilizer,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetable => "Vegetable",
            Category::Fruit => "Fruit",
            Category::Grannary => "Grannary",
            Category::Fish => "Fish",
            Category::Pesticide => "Pesticide",
            Category::Fertilizer => "Fertilizer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Piece,
    Dozen,
    Liter,
    Gram,
}

/// A listing in a seller's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub subcategory: String,
    pub price_per_unit: f64,
    pub unit: Unit,
    pub stock: u32,
    pub division: Division,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for listing a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub seller_id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Falls back to the category name.
    pub subcategory: Option<String>,
    pub price_per_unit: f64,
    pub unit: Unit,
    pub stock: u32,
    pub division: Division,
    pub image: Option<String>,
}

/// Owner edit. `seller_id` names the seller making the change and must match
/// the product's owner.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub seller_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub price_per_unit: Option<f64>,
    pub unit: Option<Unit>,
    pub stock: Option<u32>,
    pub division: Option<Division>,
    pub image: Option<String>,
}
