// SPDX-License-Identifier: MIT

use yare::parameterized;

use crate::entry::{DeleteOptions, Entry, Operation};
use crate::error::EntryError;

#[test]
fn create_requires_value() {
    let err = Entry::try_new(Operation::Create, None, None, None, 0, None).unwrap_err();
    assert_eq!(err, EntryError::ValueRequired(Operation::Create));
}

#[test]
fn update_requires_value() {
    let err = Entry::try_new(Operation::Update, None, None, None, 0, None).unwrap_err();
    assert_eq!(err, EntryError::ValueRequired(Operation::Update));
}

#[test]
fn delete_forbids_value() {
    let err = Entry::try_new(
        Operation::Delete,
        Some("v".to_string()),
        None,
        None,
        0,
        None,
    )
    .unwrap_err();
    assert_eq!(err, EntryError::ValueForbiddenForDelete);
}

#[test]
fn delete_options_forbidden_outside_delete() {
    let opts = DeleteOptions {
        force: false,
        recovery_window: None,
    };
    let err = Entry::try_new(
        Operation::Update,
        Some("v".to_string()),
        None,
        Some(opts),
        0,
        None,
    )
    .unwrap_err();
    assert_eq!(err, EntryError::DeleteOptionsNotAllowed(Operation::Update));
}

#[test]
fn force_and_recovery_window_conflict() {
    let opts = DeleteOptions {
        force: true,
        recovery_window: Some(14),
    };
    let err = Entry::try_new(Operation::Delete, None, None, Some(opts), 0, None).unwrap_err();
    assert_eq!(err, EntryError::ForceSuppressesRecoveryWindow);
}

#[parameterized(
    below_min = { 6 },
    above_max = { 31 },
)]
fn recovery_window_out_of_range(window: u32) {
    let opts = DeleteOptions {
        force: false,
        recovery_window: Some(window),
    };
    let err = Entry::try_new(Operation::Delete, None, None, Some(opts), 0, None).unwrap_err();
    assert_eq!(
        err,
        EntryError::RecoveryWindowOutOfRange {
            window,
            min: DeleteOptions::MIN_RECOVERY_WINDOW,
            max: DeleteOptions::MAX_RECOVERY_WINDOW,
        }
    );
}

#[parameterized(
    min_boundary = { 7 },
    max_boundary = { 30 },
)]
fn recovery_window_boundaries_accepted(window: u32) {
    let opts = DeleteOptions {
        force: false,
        recovery_window: Some(window),
    };
    assert!(Entry::try_new(Operation::Delete, None, None, Some(opts), 0, None).is_ok());
}

#[test]
fn delete_with_force_and_no_window_is_valid() {
    let opts = DeleteOptions {
        force: true,
        recovery_window: None,
    };
    assert!(Entry::try_new(Operation::Delete, None, None, Some(opts), 0, None).is_ok());
}
