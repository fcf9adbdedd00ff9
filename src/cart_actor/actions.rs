use crate::domain::CartLine;

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds a line, or tops up the quantity if the product is already in the cart.
    Add(CartLine),
    Remove { product_id: String },
    Clear,
}
