/// Custom actions for Product entities.
///
/// Stock moves through these so that concurrent orders for the same product
/// are serialized by the product actor.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Takes the given quantity out of stock. Fails if not enough is available.
    ReserveStock(u32),
    /// Puts a previously reserved quantity back.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockLevel(u32),
    Reserved { remaining: u32 },
    Released { available: u32 },
}
