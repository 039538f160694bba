//! Dismissible error banner

use shared::error::AppError;

/// Where a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// A list or stats load failed; the banner offers a retry
    Load,
    /// A status update, bulk action or delete failed
    Mutation,
}

/// Error banner shown above a list
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn load(err: &AppError) -> Self {
        Self {
            kind: BannerKind::Load,
            message: err.message.clone(),
        }
    }

    pub fn mutation(err: &AppError) -> Self {
        Self {
            kind: BannerKind::Mutation,
            message: err.message.clone(),
        }
    }

    /// Only load failures get a retry button
    pub fn is_retryable(&self) -> bool {
        self.kind == BannerKind::Load
    }
}
