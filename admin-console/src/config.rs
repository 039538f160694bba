//! Console configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | VENUE_API_URL | http://localhost:8080 | Admin backend base URL |
//! | VENUE_API_TOKEN | - | Bearer token |
//! | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
//! | LOG_LEVEL | info | Tracing level |
//! | LOG_DIR | - | Daily rolling log directory |
//! | CONSOLE_ROLE | admin | Role of the operator session |
//! | CONSOLE_USER | console | Operator display name |

use shared::models::Role;
use venue_client::ClientConfig;

use crate::session::Session;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub role: Role,
    pub user: String,
}

impl ConsoleConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("VENUE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            api_token: std::env::var("VENUE_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            role: std::env::var("CONSOLE_ROLE")
                .map(|r| Role::parse(&r))
                .unwrap_or(Role::Admin),
            user: std::env::var("CONSOLE_USER").unwrap_or_else(|_| "console".into()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config =
            ClientConfig::new(self.api_url.clone()).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    /// Operator session described by this configuration
    pub fn session(&self) -> Session {
        Session::new(self.user.clone(), self.user.clone(), self.role)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
