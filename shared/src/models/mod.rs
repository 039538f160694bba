//! Data models
//!
//! Rows returned by the admin backend. Optional wire fields are explicit
//! `Option`s or `#[serde(default)]` so missing data resolves here, not in
//! the views.

pub mod booking;
pub mod role;
pub mod stats;
pub mod venue;

// Re-exports
pub use booking::*;
pub use role::*;
pub use stats::*;
pub use venue::*;
