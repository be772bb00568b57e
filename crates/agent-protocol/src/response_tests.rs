// SPDX-License-Identifier: MIT

use agent_core::State;

use crate::response::{RemoteErrorKind, Response, ResponseData, ShutdownReason, NOT_STAGED};

#[test]
fn ok_with_no_data_round_trips() {
    let response = Response::ok(None);
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"success":true}"#);
    let decoded: Response = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn not_staged_maps_to_typed_error_kind() {
    let response = Response::not_staged();
    assert_eq!(response.error_kind(), Some(RemoteErrorKind::NotStaged));
}

#[test]
fn other_failure_is_not_confused_with_not_staged() {
    let response = Response::fail("unknown method: Bogus");
    assert_eq!(
        response.error_kind(),
        Some(RemoteErrorKind::Other("unknown method: Bogus".to_string()))
    );
    assert_ne!(response.error.as_deref(), Some(NOT_STAGED));
}

#[test]
fn with_shutdown_sets_both_fields() {
    let response = Response::ok(None).with_shutdown(ShutdownReason::Unstaged);
    assert_eq!(response.will_shutdown, Some(true));
    assert_eq!(response.shutdown_reason, Some(ShutdownReason::Unstaged));
}

#[test]
fn state_data_round_trips() {
    let response = Response::ok(Some(ResponseData::State {
        state: State::default(),
    }));
    let json = serde_json::to_string(&response).unwrap();
    let decoded: Response = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn is_empty_data_round_trips() {
    let response = Response::ok(Some(ResponseData::Empty { empty: true }));
    let json = serde_json::to_string(&response).unwrap();
    let decoded: Response = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, response);
}
