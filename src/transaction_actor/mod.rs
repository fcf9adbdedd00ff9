//! Payment records, one per order in the checkout flow.

pub mod entity;
pub mod error;

pub use error::*;
