//! Bulk action policy

use shared::error::{AppError, AppResult};
use std::fmt;

use crate::entity::{EntityStatus, ManagedEntity};
use crate::policy::TextInputs;

/// Entry of the bulk-action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction<S> {
    /// Move every selected row to a status
    SetStatus(S),
    /// Delete every selected row
    Delete,
}

impl<S: EntityStatus> BulkAction<S> {
    /// Menu for entity `E`: one entry per status, plus delete when supported
    pub fn menu<E: ManagedEntity<Status = S>>() -> Vec<Self> {
        let mut actions: Vec<Self> = S::ALL.iter().copied().map(Self::SetStatus).collect();
        if E::DELETABLE {
            actions.push(Self::Delete);
        }
        actions
    }

    /// Reason-required actions (suspend / cancel equivalents)
    pub fn requires_justification(&self) -> bool {
        match self {
            Self::SetStatus(s) => s.requires_justification(),
            Self::Delete => false,
        }
    }

    fn target(&self) -> Option<S> {
        match self {
            Self::SetStatus(s) => Some(*s),
            Self::Delete => None,
        }
    }
}

impl<S: fmt::Display> fmt::Display for BulkAction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetStatus(s) => write!(f, "set status to {}", s),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// A validated bulk call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRequest<S> {
    pub action: BulkAction<S>,
    pub ids: Vec<i64>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// Confirmation dialog for a bulk action over a snapshot of the selection
#[derive(Debug, Clone, PartialEq)]
pub struct BulkDialog<S> {
    action: BulkAction<S>,
    ids: Vec<i64>,
    inputs: TextInputs,
}

impl<S: EntityStatus> BulkDialog<S> {
    /// Fails on an empty selection
    pub fn new(action: BulkAction<S>, ids: Vec<i64>) -> AppResult<Self> {
        if ids.is_empty() {
            return Err(AppError::empty_selection());
        }
        Ok(Self {
            action,
            ids,
            inputs: TextInputs::default(),
        })
    }

    pub fn action(&self) -> BulkAction<S> {
        self.action
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.inputs.reason = reason.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.inputs.notes = notes.into();
    }

    pub fn validate(&self) -> AppResult<()> {
        self.inputs.validate(self.action.target())
    }

    pub fn can_confirm(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn confirm(self) -> AppResult<BulkRequest<S>> {
        self.validate()?;
        Ok(BulkRequest {
            action: self.action,
            reason: self.inputs.reason_for::<S>(),
            notes: self.inputs.notes(),
            ids: self.ids,
        })
    }
}
