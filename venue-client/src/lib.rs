//! Venue Client - HTTP client for the venue admin backend
//!
//! Provides network-based HTTP calls to the admin API.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::ServiceResponse;
