//! Product reviews written by buyers.

pub mod entity;
pub mod error;

pub use error::*;
