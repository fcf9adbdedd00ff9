//! Typed clients over the resource actors.
//!
//! Simple clients forward to a single actor. The order, review, checkout and
//! report clients orchestrate several actors and hold the clients they need.

#[macro_use]
mod macros;

mod cart_client;
mod checkout_client;
mod complaint_client;
mod order_client;
mod product_client;
mod report_client;
mod review_client;
mod transaction_client;
mod user_client;

pub use cart_client::CartClient;
pub use checkout_client::{CheckoutClient, CheckoutError};
pub use complaint_client::ComplaintClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use report_client::{ReportClient, ReportError};
pub use review_client::ReviewClient;
pub use transaction_client::TransactionClient;
pub use user_client::UserClient;

/// Totals computed on both sides of the wire may differ by float noise.
pub(crate) const PRICE_TOLERANCE: f64 = 0.01;
