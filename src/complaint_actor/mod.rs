//! Disputes between buyers and sellers.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
