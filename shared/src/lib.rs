//! Shared types for the venue admin console
//!
//! Data models, wire envelopes and the error system used by both the
//! HTTP client and the console core.

pub mod error;
pub mod models;
pub mod money;
pub mod request;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::ServiceResponse;
