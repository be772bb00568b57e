// SPDX-License-Identifier: MIT

//! A staged create/update/delete of one named value (spec §3 "Entry").

use serde::{Deserialize, Serialize};

use crate::error::EntryError;

/// Closed `{Create, Update, Delete}` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

/// Recovery-window options for a staged delete. Only meaningful on
/// services that support soft-delete recovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOptions {
    #[serde(default)]
    pub force: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_window: Option<u32>,
}

impl DeleteOptions {
    pub const MIN_RECOVERY_WINDOW: u32 = 7;
    pub const MAX_RECOVERY_WINDOW: u32 = 30;

    fn validate(&self) -> Result<(), EntryError> {
        if self.force && self.recovery_window.is_some() {
            return Err(EntryError::ForceSuppressesRecoveryWindow);
        }
        if let Some(window) = self.recovery_window {
            if !(Self::MIN_RECOVERY_WINDOW..=Self::MAX_RECOVERY_WINDOW).contains(&window) {
                return Err(EntryError::RecoveryWindowOutOfRange {
                    window,
                    min: Self::MIN_RECOVERY_WINDOW,
                    max: Self::MAX_RECOVERY_WINDOW,
                });
            }
        }
        Ok(())
    }
}

/// The staged mutation of a single named value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_options: Option<DeleteOptions>,
    pub staged_at_ms: u64,
    /// The remote's last-modified time observed when staging began. Opaque
    /// to the core; consumed only by the external conflict check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_modified_at_ms: Option<u64>,
}

impl Entry {
    /// Construct an Entry, enforcing the invariants in spec §3:
    /// `value` set iff `operation != Delete`; `delete_options` only on
    /// `Delete`; `force=true` forbids `recovery_window`; `recovery_window`
    /// in `[7,30]`.
    pub fn try_new(
        operation: Operation,
        value: Option<String>,
        description: Option<String>,
        delete_options: Option<DeleteOptions>,
        staged_at_ms: u64,
        base_modified_at_ms: Option<u64>,
    ) -> Result<Self, EntryError> {
        match operation {
            Operation::Delete => {
                if value.is_some() {
                    return Err(EntryError::ValueForbiddenForDelete);
                }
            }
            Operation::Create | Operation::Update => {
                if value.is_none() {
                    return Err(EntryError::ValueRequired(operation));
                }
                if delete_options.is_some() {
                    return Err(EntryError::DeleteOptionsNotAllowed(operation));
                }
            }
        }
        if let Some(opts) = &delete_options {
            opts.validate()?;
        }
        Ok(Self {
            operation,
            value,
            description,
            delete_options,
            staged_at_ms,
            base_modified_at_ms,
        })
    }
}
