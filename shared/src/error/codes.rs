//! Unified error codes for the venue admin console
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Venue errors
//! - 4xxx: Booking errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the backend and the
/// console agree on a compact wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Selection is empty
    EmptySelection = 9,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Venue ====================
    /// Venue not found
    VenueNotFound = 3001,
    /// Venue status change needs a reason
    VenueReasonRequired = 3002,
    /// Venue already has the requested status
    VenueStatusUnchanged = 3003,
    /// Venue status update rejected by the service
    VenueUpdateFailed = 3004,
    /// Venue delete rejected by the service
    VenueDeleteFailed = 3005,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Booking status change needs a note
    BookingNoteRequired = 4002,
    /// Booking already has the requested status
    BookingStatusUnchanged = 4003,
    /// Booking status update rejected by the service
    BookingUpdateFailed = 4004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error talking to the backend
    NetworkError = 9002,
    /// Backend returned a malformed response
    InvalidResponse = 9003,
    /// Operation not supported by this backend
    Unsupported = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::EmptySelection => "No items selected",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Venue
            ErrorCode::VenueNotFound => "Venue not found",
            ErrorCode::VenueReasonRequired => "A reason is required for this venue status",
            ErrorCode::VenueStatusUnchanged => "Venue already has this status",
            ErrorCode::VenueUpdateFailed => "Failed to update venue status",
            ErrorCode::VenueDeleteFailed => "Failed to delete venue",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingNoteRequired => "A note is required for this booking status",
            ErrorCode::BookingStatusUnchanged => "Booking already has this status",
            ErrorCode::BookingUpdateFailed => "Failed to update booking status",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::InvalidResponse => "Invalid response from server",
            ErrorCode::Unsupported => "Operation not supported",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            9 => Ok(ErrorCode::EmptySelection),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Venue
            3001 => Ok(ErrorCode::VenueNotFound),
            3002 => Ok(ErrorCode::VenueReasonRequired),
            3003 => Ok(ErrorCode::VenueStatusUnchanged),
            3004 => Ok(ErrorCode::VenueUpdateFailed),
            3005 => Ok(ErrorCode::VenueDeleteFailed),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::BookingNoteRequired),
            4003 => Ok(ErrorCode::BookingStatusUnchanged),
            4004 => Ok(ErrorCode::BookingUpdateFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::InvalidResponse),
            9004 => Ok(ErrorCode::Unsupported),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
