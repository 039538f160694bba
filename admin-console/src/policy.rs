//! Status-transition policy
//!
//! Any status is reachable from any other. The one rule: entering a gated
//! status (venue `suspended`/`under_review`, booking `cancelled`/`disputed`)
//! needs a non-empty justification, and the dialog refuses to confirm until
//! it has one. Nothing here talks to the backend.

use shared::error::{AppError, AppResult};

use crate::entity::{EntityStatus, Justification, ManagedEntity};

/// Notes and reasons are capped at this many characters
pub const MAX_NOTE_LEN: usize = 500;

/// Free-text inputs shared by the single and bulk dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextInputs {
    pub reason: String,
    pub notes: String,
}

impl TextInputs {
    /// Text that satisfies the justification gate for status type `S`
    fn justification<S: EntityStatus>(&self) -> &str {
        match S::JUSTIFICATION {
            Justification::Reason => &self.reason,
            Justification::Note => &self.notes,
        }
    }

    pub(crate) fn validate<S: EntityStatus>(&self, target: Option<S>) -> AppResult<()> {
        if let Some(status) = target
            && status.requires_justification()
            && self.justification::<S>().trim().is_empty()
        {
            return Err(AppError::new(S::missing_justification_code())
                .with_detail("status", status.to_string())
                .with_detail("field", S::JUSTIFICATION.label()));
        }
        for (field, value) in [("reason", &self.reason), ("notes", &self.notes)] {
            let len = value.trim().chars().count();
            if len > MAX_NOTE_LEN {
                return Err(AppError::validation(format!(
                    "{field} is too long ({len} chars, max {MAX_NOTE_LEN})"
                ))
                .with_detail("field", field));
            }
        }
        Ok(())
    }

    /// Trimmed reason; entities justified by a note never send one
    pub(crate) fn reason_for<S: EntityStatus>(&self) -> Option<String> {
        match S::JUSTIFICATION {
            Justification::Reason => non_blank(&self.reason),
            Justification::Note => None,
        }
    }

    pub(crate) fn notes(&self) -> Option<String> {
        non_blank(&self.notes)
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// A validated status change, ready for the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange<S> {
    pub entity_id: i64,
    pub status: S,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// Confirmation dialog for a single-row status change
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeDialog<S> {
    entity_id: i64,
    current: S,
    target: S,
    inputs: TextInputs,
}

impl<S: EntityStatus> StatusChangeDialog<S> {
    pub fn new(entity_id: i64, current: S, target: S) -> Self {
        Self {
            entity_id,
            current,
            target,
            inputs: TextInputs::default(),
        }
    }

    pub fn entity_id(&self) -> i64 {
        self.entity_id
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn target(&self) -> S {
        self.target
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.inputs.reason = reason.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.inputs.notes = notes.into();
    }

    /// Whether the dialog should show the mandatory justification field
    pub fn needs_justification(&self) -> bool {
        self.target.requires_justification()
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.target == self.current {
            return Err(AppError::new(S::unchanged_code())
                .with_detail("status", self.current.to_string()));
        }
        self.inputs.validate(Some(self.target))
    }

    /// Drives the confirm button's enabled state
    pub fn can_confirm(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn confirm(self) -> AppResult<StatusChange<S>> {
        self.validate()?;
        Ok(StatusChange {
            entity_id: self.entity_id,
            status: self.target,
            reason: self.inputs.reason_for::<S>(),
            notes: self.inputs.notes(),
        })
    }
}

/// Open a status-change dialog for `entity`
pub fn request_status_change<E: ManagedEntity>(
    entity: &E,
    new_status: E::Status,
) -> StatusChangeDialog<E::Status> {
    StatusChangeDialog::new(entity.id(), entity.status(), new_status)
}
