//! Documents exchanged over the API and stored by the actors.
//!
//! These are plain data types with serde derives; validation and lifecycle
//! rules live in the `*_actor` modules, cross-document rules in `clients`.

pub mod cart;
pub mod checkout;
pub mod complaint;
pub mod division;
pub mod filters;
pub mod order;
pub mod product;
pub mod report;
pub mod review;
pub mod transaction;
pub mod user;

pub use cart::*;
pub use checkout::*;
pub use complaint::*;
pub use division::*;
pub use filters::*;
pub use order::*;
pub use product::*;
pub use report::*;
pub use review::*;
pub use transaction::*;
pub use user::*;

/// Trims the value and reports whether anything is left.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
