//! Query-string filters for list endpoints.
//!
//! Each filter is evaluated over the full collection of a resource. Absent
//! fields, empty strings and the literal `all` mean "no constraint".

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::{Complaint, Order, Product, Transaction};

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub division: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub seller_id: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = active(&self.search) {
            if !contains_ci(&product.name, term) && !contains_ci(&product.description, term) {
                return false;
            }
        }
        if let Some(category) = active(&self.category) {
            if product.category.as_str() != category {
                return false;
            }
        }
        if let Some(division) = active(&self.division) {
            if product.division.as_str() != division {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price_per_unit < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price_per_unit > max) {
            return false;
        }
        if let Some(seller_id) = active(&self.seller_id) {
            if product.seller_id != seller_id {
                return false;
            }
        }
        true
    }
}

/// Inclusive calendar-day window over `created_at` (UTC).
fn within(start: Option<NaiveDate>, end: Option<NaiveDate>, at: &DateTime<Utc>) -> bool {
    let day = at.date_naive();
    start.map_or(true, |start| day >= start) && end.map_or(true, |end| day <= end)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl OrderFilter {
    /// `buyer_name` is resolved by the caller; orders only store the buyer id.
    pub fn matches(&self, order: &Order, buyer_name: &str) -> bool {
        if let Some(term) = active(&self.search) {
            if !contains_ci(buyer_name, term) && !contains_ci(&order.id, term) {
                return false;
            }
        }
        within(self.start_date, self.end_date, &order.created_at)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionFilter {
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(term) = active(&self.search) {
            if !contains_ci(&transaction.order_id, term)
                && !contains_ci(&transaction.buyer_name, term)
            {
                return false;
            }
        }
        within(self.start_date, self.end_date, &transaction.created_at)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintFilter {
    pub search: Option<String>,
}

impl ComplaintFilter {
    pub fn matches(&self, complaint: &Complaint, accused_name: &str) -> bool {
        match active(&self.search) {
            Some(term) => contains_ci(&complaint.message, term) || contains_ci(accused_name, term),
            None => true,
        }
    }
}

/// Free-text search over people (name or email).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeopleFilter {
    pub search: Option<String>,
}

impl PeopleFilter {
    pub fn matches(&self, name: &str, email: &str) -> bool {
        match active(&self.search) {
            Some(term) => contains_ci(name, term) || contains_ci(email, term),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Division, OrderStatus, Unit};
    use chrono::TimeZone;

    fn product(name: &str, category: Category, division: Division, price: f64) -> Product {
        let now = Utc::now();
        Product {
            id: format!("product_{name}"),
            seller_id: "user_1".into(),
            name: name.into(),
            description: format!("Fresh {name} from the farm"),
            category,
            subcategory: category.to_string(),
            price_per_unit: price,
            unit: Unit::Kg,
            stock: 10,
            division,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Potato", Category::Vegetable, Division::Dhaka, 30.0),
            product("Mango", Category::Fruit, Division::Rajshahi, 120.0),
            product("Hilsa", Category::Fish, Division::Barisal, 900.0),
            product("Tomato", Category::Vegetable, Division::Rajshahi, 60.0),
        ]
    }

    fn names(filter: &ProductFilter) -> Vec<String> {
        catalog()
            .into_iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn test_category_is_exact_match() {
        let filter = ProductFilter {
            category: Some("Vegetable".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter), vec!["Potato", "Tomato"]);

        let lowercase = ProductFilter {
            category: Some("vegetable".into()),
            ..Default::default()
        };
        assert!(names(&lowercase).is_empty());

        let all = ProductFilter {
            category: Some("all".into()),
            ..Default::default()
        };
        assert_eq!(names(&all).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let filter = ProductFilter {
            search: Some("MANGO".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter), vec!["Mango"]);

        let by_description = ProductFilter {
            search: Some("farm".into()),
            ..Default::default()
        };
        assert_eq!(names(&by_description).len(), 4);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = ProductFilter {
            min_price: Some(60.0),
            max_price: Some(120.0),
            ..Default::default()
        };
        assert_eq!(names(&filter), vec!["Mango", "Tomato"]);
    }

    #[test]
    fn test_division_and_category_combine() {
        let filter = ProductFilter {
            category: Some("Vegetable".into()),
            division: Some("Rajshahi".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter), vec!["Tomato"]);
    }

    #[test]
    fn test_order_filter_date_window_is_inclusive() {
        let created = Utc.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap();
        let order = Order {
            id: "order_7".into(),
            buyer_id: "user_1".into(),
            seller_id: "user_2".into(),
            ordered_products: vec![],
            total_price: 10.0,
            status: OrderStatus::Pending,
            created_at: created,
            updated_at: created,
        };
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let filter = OrderFilter {
            search: Some("rahim".into()),
            start_date: Some(day),
            end_date: Some(day),
        };
        assert!(filter.matches(&order, "Rahim Uddin"));
        assert!(!filter.matches(&order, "Karim"));

        let later = OrderFilter {
            search: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 11),
            end_date: None,
        };
        assert!(!later.matches(&order, "Rahim Uddin"));
    }
}
