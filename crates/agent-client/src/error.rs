// SPDX-License-Identifier: MIT

//! Client-visible error kinds (spec §7 "Error handling design").

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not connect to the daemon socket")]
    NotConnected,

    #[error("the daemon did not start within the connect timeout")]
    DaemonDidNotStart,

    #[error("daemon closed the connection before sending a response")]
    DaemonClosedConnection,

    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("timed out waiting for the daemon")]
    Timeout,

    #[error("the entry or tag is not staged")]
    NotStaged,

    #[error("the daemon rejected the request: {0}")]
    Remote(String),

    #[error("autostart is disabled; start the daemon manually: `agentd start --foreground --account <id> --region <region>`")]
    ManualModeRefused,
}

/// Collapse the wire protocol's error taxonomy onto the client-visible one
/// (spec §4.2 "Errors"): a closed connection and a genuine timeout stay
/// distinguishable, everything else becomes `Transport`/`Decode`.
impl From<agent_protocol::ProtocolError> for ClientError {
    fn from(err: agent_protocol::ProtocolError) -> Self {
        let description = err.to_string();
        match err {
            agent_protocol::ProtocolError::ConnectionClosed => ClientError::DaemonClosedConnection,
            agent_protocol::ProtocolError::Timeout => ClientError::Timeout,
            agent_protocol::ProtocolError::Json(source) => ClientError::Decode(source),
            agent_protocol::ProtocolError::Io(source) => ClientError::Transport(source),
            agent_protocol::ProtocolError::MessageTooLarge { .. } => ClientError::Transport(
                std::io::Error::new(std::io::ErrorKind::InvalidData, description),
            ),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
