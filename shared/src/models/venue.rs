//! Venue Model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Timestamp;

/// Venue lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VenueStatus {
    #[default]
    Pending,
    UnderReview,
    Active,
    Suspended,
}

impl VenueStatus {
    /// All statuses in tab order
    pub const ALL: [VenueStatus; 4] = [
        VenueStatus::Pending,
        VenueStatus::UnderReview,
        VenueStatus::Active,
        VenueStatus::Suspended,
    ];

    /// Wire name (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under_review",
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }

    /// Entering this status needs an operator reason
    pub fn requires_reason(&self) -> bool {
        matches!(self, Self::Suspended | Self::UnderReview)
    }
}

impl fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Venue type (场地类型)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    BanquetHall,
    ConferenceRoom,
    Outdoor,
    Studio,
    Restaurant,
    Other,
}

impl VenueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BanquetHall => "banquet_hall",
            Self::ConferenceRoom => "conference_room",
            Self::Outdoor => "outdoor",
            Self::Studio => "studio",
            Self::Restaurant => "restaurant",
            Self::Other => "other",
        }
    }
}

/// Owner reference embedded in a venue row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueOwner {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Venue entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub capacity: u32,
    /// Hourly price
    #[serde(default)]
    pub price_per_hour: f64,
    #[serde(default)]
    pub status: VenueStatus,
    /// Explicit activation flag; resolved from `status` when the backend omits it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_type: Option<VenueType>,
    #[serde(default)]
    pub owner: VenueOwner,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    /// Lifetime revenue aggregate
    #[serde(default)]
    pub revenue: f64,
    /// Reason attached to the last status change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_changed_at: Option<Timestamp>,
}

impl Venue {
    /// Whether the venue counts as approved
    pub fn is_active(&self) -> bool {
        self.is_active
            .unwrap_or(self.status == VenueStatus::Active)
    }

    /// Rating resolved to 0.0 when the venue has no reviews yet
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&VenueStatus::UnderReview).unwrap();
        assert_eq!(json, "\"under_review\"");
        let parsed: VenueStatus = serde_json::from_str("\"suspended\"").unwrap();
        assert_eq!(parsed, VenueStatus::Suspended);
        assert!(serde_json::from_str::<VenueStatus>("\"archived\"").is_err());
    }

    #[test]
    fn test_reason_required_statuses() {
        assert!(VenueStatus::Suspended.requires_reason());
        assert!(VenueStatus::UnderReview.requires_reason());
        assert!(!VenueStatus::Active.requires_reason());
        assert!(!VenueStatus::Pending.requires_reason());
    }

    #[test]
    fn test_minimal_row_resolves_defaults() {
        let venue: Venue = serde_json::from_str(r#"{"id": 7, "name": "Loft"}"#).unwrap();
        assert_eq!(venue.status, VenueStatus::Pending);
        assert!(!venue.is_active());
        assert_eq!(venue.rating_or_zero(), 0.0);
        assert!(venue.amenities.is_empty());
        assert_eq!(venue.owner.name, "");
    }

    #[test]
    fn test_is_active_flag_overrides_status() {
        let mut venue: Venue =
            serde_json::from_str(r#"{"id": 1, "name": "Hall", "status": "active"}"#).unwrap();
        assert!(venue.is_active());
        venue.is_active = Some(false);
        assert!(!venue.is_active());
    }
}
