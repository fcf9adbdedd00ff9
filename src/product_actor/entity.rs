use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{is_blank, Product, ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};
use super::ProductError;

fn check_text(field: &str, value: &str) -> Result<(), ProductError> {
    if is_blank(value) {
        return Err(ProductError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::ValidationError(format!(
            "price_per_unit must be positive, got {price}"
        )));
    }
    Ok(())
}

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, payload: ProductCreate) -> Result<Self, ProductError> {
        check_text("name", &payload.name)?;
        check_text("description", &payload.description)?;
        check_price(payload.price_per_unit)?;

        let subcategory = payload
            .subcategory
            .filter(|s| !is_blank(s))
            .unwrap_or_else(|| payload.category.to_string());
        let now = Utc::now();
        Ok(Self {
            id,
            seller_id: payload.seller_id,
            name: payload.name.trim().to_string(),
            description: payload.description.trim().to_string(),
            category: payload.category,
            subcategory,
            price_per_unit: payload.price_per_unit,
            unit: payload.unit,
            stock: payload.stock,
            division: payload.division,
            image: payload.image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies an owner edit. Everything is validated before anything changes.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), ProductError> {
        if patch.seller_id != self.seller_id {
            return Err(ProductError::NotOwner {
                product_id: self.id.clone(),
                seller_id: patch.seller_id,
            });
        }
        if let Some(name) = &patch.name {
            check_text("name", name)?;
        }
        if let Some(description) = &patch.description {
            check_text("description", description)?;
        }
        if let Some(price) = patch.price_per_unit {
            check_price(price)?;
        }

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        match patch.subcategory.filter(|s| !is_blank(s)) {
            Some(subcategory) => self.subcategory = subcategory,
            // A category change without a subcategory resets it
            None if patch.category.is_some() => self.subcategory = self.category.to_string(),
            None => {}
        }
        if let Some(price) = patch.price_per_unit {
            self.price_per_unit = price;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(division) = patch.division {
            self.division = division;
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// # Errors
    /// Reserving more than is in stock, or a zero quantity, is rejected and
    /// leaves stock unchanged.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(self.stock)),
            ProductAction::ReserveStock(0) | ProductAction::ReleaseStock(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::ReserveStock(amount) => {
                if self.stock >= amount {
                    self.stock -= amount;
                    self.updated_at = Utc::now();
                    Ok(ProductActionResult::Reserved { remaining: self.stock })
                } else {
                    Err(ProductError::InsufficientStock {
                        requested: amount,
                        available: self.stock,
                    })
                }
            }
            ProductAction::ReleaseStock(amount) => {
                self.stock = self.stock.saturating_add(amount);
                self.updated_at = Utc::now();
                Ok(ProductActionResult::Released { available: self.stock })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Division, Unit};

    fn potatoes() -> Product {
        Product::from_create(
            "product_1".into(),
            ProductCreate {
                seller_id: "user_2".into(),
                name: "Potato".into(),
                description: "Diamond potatoes".into(),
                category: Category::Vegetable,
                subcategory: None,
                price_per_unit: 28.0,
                unit: Unit::Kg,
                stock: 50,
                division: Division::Rangpur,
                image: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_subcategory_defaults_to_category() {
        assert_eq!(potatoes().subcategory, "Vegetable");
    }

    #[test]
    fn test_reserve_and_release() {
        let mut product = potatoes();
        assert_eq!(
            product.handle_action(ProductAction::ReserveStock(20)),
            Ok(ProductActionResult::Reserved { remaining: 30 })
        );
        assert_eq!(
            product.handle_action(ProductAction::ReserveStock(31)),
            Err(ProductError::InsufficientStock { requested: 31, available: 30 })
        );
        assert_eq!(
            product.handle_action(ProductAction::ReleaseStock(5)),
            Ok(ProductActionResult::Released { available: 35 })
        );
        assert_eq!(
            product.handle_action(ProductAction::ReserveStock(0)),
            Err(ProductError::InvalidQuantity(0))
        );
    }

    #[test]
    fn test_only_owner_can_update() {
        let mut product = potatoes();
        let patch = ProductPatch {
            seller_id: "user_9".into(),
            price_per_unit: Some(1.0),
            ..ProductPatch::default()
        };
        assert!(matches!(product.on_update(patch), Err(ProductError::NotOwner { .. })));
        assert_eq!(product.price_per_unit, 28.0);

        let patch = ProductPatch {
            seller_id: "user_2".into(),
            category: Some(Category::Fruit),
            price_per_unit: Some(30.0),
            ..ProductPatch::default()
        };
        product.on_update(patch).unwrap();
        assert_eq!(product.subcategory, "Fruit");
        assert_eq!(product.price_per_unit, 30.0);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut product = potatoes();
        let patch = ProductPatch {
            seller_id: "user_2".into(),
            price_per_unit: Some(0.0),
            name: Some("Renamed".into()),
            ..ProductPatch::default()
        };
        assert!(matches!(product.on_update(patch), Err(ProductError::ValidationError(_))));
        assert_eq!(product.name, "Potato");
    }
}
