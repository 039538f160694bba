//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Timestamp;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Disputed,
    Completed,
}

impl BookingStatus {
    /// All statuses in tab order
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Disputed,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Disputed => "disputed",
            Self::Completed => "completed",
        }
    }

    /// Entering this status needs an operator note
    pub fn requires_note(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Disputed)
    }

    /// Booking brings in revenue
    pub fn is_billable(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Completed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer reference embedded in a booking row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingCustomer {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Venue reference embedded in a booking row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingVenue {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Booking entity (场地预订)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Human-facing reference code, e.g. "BK-2024-0012"
    pub reference: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub customer: BookingCustomer,
    #[serde(default)]
    pub venue: BookingVenue,
    /// Event date, `YYYY-MM-DD` on the wire
    pub event_date: NaiveDate,
    /// Start time (HH:MM)
    #[serde(default)]
    pub start_time: String,
    /// End time (HH:MM)
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub guest_count: u32,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Timestamp,
}
