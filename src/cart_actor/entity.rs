use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Cart, CartCreate};
use super::{CartAction, CartError};

impl Entity for Cart {
    type Id = String;
    type CreatePayload = CartCreate;
    type Patch = ();
    type Action = CartAction;
    type ActionResult = Cart;
    type Error = CartError;

    fn id(&self) -> &String {
        &self.buyer_id
    }

    fn requested_id(payload: &CartCreate) -> Option<String> {
        Some(payload.buyer_id.clone())
    }

    fn from_create(id: String, _payload: CartCreate) -> Result<Self, CartError> {
        Ok(Self {
            buyer_id: id,
            lines: Vec::new(),
            updated_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), CartError> {
        Ok(())
    }

    fn handle_action(&mut self, action: CartAction) -> Result<Cart, CartError> {
        match action {
            CartAction::Add(line) => {
                if line.quantity == 0 {
                    return Err(CartError::ValidationError("quantity must be at least 1".into()));
                }
                match self.lines.iter_mut().find(|l| l.product_id == line.product_id) {
                    Some(existing) => {
                        existing.quantity += line.quantity;
                        existing.price_per_unit = line.price_per_unit;
                    }
                    None => self.lines.push(line),
                }
            }
            CartAction::Remove { product_id } => {
                let before = self.lines.len();
                self.lines.retain(|l| l.product_id != product_id);
                if self.lines.len() == before {
                    return Err(CartError::NotFound(product_id));
                }
            }
            CartAction::Clear => self.lines.clear(),
        }
        self.updated_at = Utc::now();
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CartLine;

    fn line(product: &str, quantity: u32) -> CartLine {
        CartLine {
            product_id: product.into(),
            seller_id: "user_2".into(),
            quantity,
            price_per_unit: 10.0,
        }
    }

    #[test]
    fn test_adding_same_product_tops_up() {
        let mut cart = Cart::from_create("user_1".into(), CartCreate { buyer_id: "user_1".into() })
            .unwrap();
        cart.handle_action(CartAction::Add(line("product_1", 2))).unwrap();
        let cart = cart.handle_action(CartAction::Add(line("product_1", 3))).unwrap();
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn test_remove_missing_line() {
        let mut cart = Cart::from_create("user_1".into(), CartCreate { buyer_id: "user_1".into() })
            .unwrap();
        assert_eq!(
            cart.handle_action(CartAction::Remove { product_id: "product_9".into() }),
            Err(CartError::NotFound("product_9".into()))
        );
    }
}
