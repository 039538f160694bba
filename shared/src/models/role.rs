//! Role Model

use serde::{Deserialize, Serialize};

/// Operator role as resolved by the authentication layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Owner,
    Customer,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Lenient parse used for env/config values
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "owner" => Self::Owner,
            "customer" => Self::Customer,
            _ => Self::Unknown,
        }
    }
}
