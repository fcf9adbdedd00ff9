//! System orchestration, startup, and shutdown logic.

pub mod market_system;
pub mod telemetry;

pub use market_system::*;
pub use telemetry::*;
