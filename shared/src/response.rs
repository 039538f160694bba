//! Service response envelope
//!
//! Every admin endpoint answers with the same envelope:
//! ```json
//! { "success": true, "data": [ ... ] }
//! { "success": false, "error": "Venue not found", "code": 3001 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Unified service response structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Optional structured code; unknown codes are dropped
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_code"
    )]
    pub code: Option<ErrorCode>,
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<ErrorCode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<u16>::deserialize(deserializer)?;
    Ok(raw.and_then(|c| ErrorCode::try_from(c).ok()))
}

impl<T> ServiceResponse<T> {
    /// Create a success response with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
        }
    }

    /// Create a failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            code: None,
        }
    }

    /// Create a failure response carrying an error code
    pub fn failure_with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            ..Self::failure(message)
        }
    }

    /// Convert into a `Result`, treating a missing payload as an invalid response
    pub fn into_result(self) -> AppResult<T> {
        match self.into_outcome(ErrorCode::Unknown)? {
            Some(data) => Ok(data),
            None => Err(AppError::invalid_response("Missing response data")),
        }
    }

    /// Convert into a `Result`, allowing an empty payload (mutation endpoints)
    ///
    /// `fallback` is the code used when the backend fails without one.
    pub fn into_outcome(self, fallback: ErrorCode) -> AppResult<Option<T>> {
        if self.success {
            return Ok(self.data);
        }
        let code = self.code.unwrap_or(fallback);
        let message = self
            .error
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| code.message().to_string());
        Err(AppError::with_message(code, message))
    }
}

impl ServiceResponse<()> {
    /// Create a success response without data
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            code: None,
        }
    }
}
