//! Per-buyer carts, keyed by buyer id.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
