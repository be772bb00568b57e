// SPDX-License-Identifier: MIT

//! `IpcClient` — one-shot request/reply over the per-scope socket (spec
//! §4.2 C6 IpcClient).
//!
//! One instance per `ClientStore`, no persistent connection. Each call
//! dials, sends exactly one request, reads exactly one response, and
//! closes — grounded on the teacher's `DaemonClient::send_with_timeout`
//! (`crates/cli/src/client.rs`), generalized from two split timeouts to
//! the single end-to-end deadline spec §4.2 step 2 specifies.

use std::path::{Path, PathBuf};

use agent_protocol::{read_response, write_request, Request, Response};
use tokio::io::BufReader;
use tokio::net::UnixStream;
use tokio::sync::Mutex;

use crate::env;
use crate::error::ClientError;

/// Talks to exactly one socket path. Holds an internal mutex so at most
/// one call is in flight per instance (spec §4.2 "Concurrency"); separate
/// instances may still run concurrently.
pub struct IpcClient {
    socket_path: PathBuf,
    inflight: Mutex<()>,
}

impl IpcClient {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            inflight: Mutex::new(()),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Dial, send `request`, and read back the typed response.
    pub async fn send(&self, request: &Request) -> Result<Response, ClientError> {
        let _guard = self.inflight.lock().await;

        let stream = tokio::time::timeout(env::timeout_dial(), UnixStream::connect(&self.socket_path))
            .await
            .map_err(|_| ClientError::NotConnected)?
            .map_err(|_| ClientError::NotConnected)?;

        let deadline = env::timeout_request();
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        write_request(&mut write_half, request, deadline).await?;
        let response = read_response(&mut reader, deadline).await?;

        if !response.success {
            let message = response.error.clone().unwrap_or_default();
            return match response.error_kind() {
                Some(agent_protocol::RemoteErrorKind::NotStaged) => Err(ClientError::NotStaged),
                _ => Err(ClientError::Remote(message)),
            };
        }

        Ok(response)
    }

    /// Convenience wrapper for the health-check used throughout the
    /// Launcher (spec §4.3 step 1 and step 4).
    pub async fn ping(&self) -> Result<(), ClientError> {
        self.send(&Request::Ping).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "ipc_client_tests.rs"]
mod ipc_client_tests;
