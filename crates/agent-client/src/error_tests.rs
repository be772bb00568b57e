// SPDX-License-Identifier: MIT

use agent_protocol::ProtocolError;

use super::ClientError;

#[test]
fn connection_closed_maps_to_daemon_closed_connection() {
    let err: ClientError = ProtocolError::ConnectionClosed.into();
    assert!(matches!(err, ClientError::DaemonClosedConnection));
}

#[test]
fn protocol_timeout_maps_to_client_timeout() {
    let err: ClientError = ProtocolError::Timeout.into();
    assert!(matches!(err, ClientError::Timeout));
}

#[test]
fn json_error_maps_to_decode() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ClientError = ProtocolError::Json(json_err).into();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[test]
fn message_too_large_maps_to_transport() {
    let err: ClientError = ProtocolError::MessageTooLarge { size: 10, max: 1 }.into();
    assert!(matches!(err, ClientError::Transport(_)));
}
