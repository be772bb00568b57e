// SPDX-License-Identifier: MIT

//! Validation errors for the data model types in this crate.

use thiserror::Error;

use crate::entry::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("value is required for operation {0:?}")]
    ValueRequired(Operation),

    #[error("value is forbidden for a Delete entry")]
    ValueForbiddenForDelete,

    #[error("delete_options is only valid for operation Delete, got {0:?}")]
    DeleteOptionsNotAllowed(Operation),

    #[error("force=true suppresses recovery_window; both were set")]
    ForceSuppressesRecoveryWindow,

    #[error("recovery_window {window} out of range [{min}, {max}]")]
    RecoveryWindowOutOfRange { window: u32, min: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagEntryError {
    #[error("an empty add+remove TagEntry must not exist; unstage instead")]
    Empty,

    #[error("key {0:?} present in both add and remove")]
    KeyInBothAddAndRemove(String),
}
