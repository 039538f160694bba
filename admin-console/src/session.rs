//! Operator session and the admin gate

use shared::error::AppError;
use shared::models::Role;
use thiserror::Error;

/// Resolved operator session, passed into the console explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            role,
        }
    }

    /// Admin session shortcut
    pub fn admin(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        Self::new(user_id.clone(), user_id, Role::Admin)
    }

    /// Gate every admin screen
    pub fn require_admin(&self) -> Result<(), AccessDenied> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(AccessDenied { role: self.role })
        }
    }
}

/// Static denial view; only a role change upstream gets past it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Access denied: administrator role is required")]
pub struct AccessDenied {
    pub role: Role,
}

impl From<AccessDenied> for AppError {
    fn from(_: AccessDenied) -> Self {
        AppError::admin_required()
    }
}
