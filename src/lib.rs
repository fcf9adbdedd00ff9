//! Backend for a buyer/seller agricultural marketplace.
//!
//! Each resource lives in its own [`actor_framework::ResourceActor`]; typed
//! clients in [`clients`] talk to those actors and orchestrate multi-actor
//! flows (order placement, checkout, reports). [`http`] exposes them as a
//! REST API.

pub mod actor_framework;
pub mod app_system;
pub mod cart_actor;
pub mod clients;
pub mod complaint_actor;
pub mod config;
pub mod domain;
pub mod http;
pub mod order_actor;
pub mod product_actor;
pub mod review_actor;
pub mod transaction_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
