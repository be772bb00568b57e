// SPDX-License-Identifier: MIT

//! IpcServer: per-scope accept loop (spec §4.4 C4 IpcServer).

use std::path::PathBuf;
use std::sync::Arc;

use agent_core::Scope;
use agent_protocol::{read_request, write_response, ProtocolError, Request, Response, SERVER_DEADLINE};
use thiserror::Error;
use tokio::io::BufReader;
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::Notify;
use tracing::{debug, info, warn};

use crate::handler::Handler;
use crate::security::{self, PeerAuthError};
use crate::shutdown::classify;
use crate::socket_path;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to prepare socket path {path}: {source}")]
    Prepare {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to bind socket at {path}: {source}")]
    Bind {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct IpcServer {
    listener: UnixListener,
    path: PathBuf,
}

impl IpcServer {
    /// Create the socket with restrictive permissions and bind it (spec
    /// §4.4 "Socket setup").
    pub fn bind(scope: &Scope) -> Result<Self, ServerError> {
        Self::bind_at(socket_path::socket_path(scope))
    }

    /// Bind directly to an explicit path, bypassing scope-based derivation.
    /// Used by tests that need a socket under a temp directory.
    pub fn bind_at(path: PathBuf) -> Result<Self, ServerError> {
        socket_path::prepare(&path).map_err(|source| ServerError::Prepare {
            path: path.clone(),
            source,
        })?;
        let listener = UnixListener::bind(&path).map_err(|source| ServerError::Bind {
            path: path.clone(),
            source,
        })?;
        if let Err(err) = socket_path::lock_down_mode(&path) {
            warn!("failed to set socket mode 0600 on {}: {err}", path.display());
        }
        Ok(Self { listener, path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Accept connections until `shutdown` is notified. Each connection is
    /// handled in its own task under `SERVER_DEADLINE`; when a handled
    /// request's response carries `will_shutdown`, or the request was a
    /// manual `Shutdown`, the connection task notifies `shutdown` itself
    /// once the response has been flushed (spec §4.5 "deferred until the
    /// response has been written").
    pub async fn serve(self, handler: Arc<Handler>, shutdown: Arc<Notify>, auto_shutdown_disabled: bool) {
        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, _addr)) => {
                            let handler = Arc::clone(&handler);
                            let shutdown = Arc::clone(&shutdown);
                            tokio::spawn(async move {
                                if let Err(err) = tokio::time::timeout(
                                    SERVER_DEADLINE,
                                    handle_connection(stream, &handler, &shutdown, auto_shutdown_disabled),
                                )
                                .await
                                {
                                    warn!("connection exceeded server deadline: {err}");
                                }
                            });
                        }
                        Err(err) => warn!("accept error: {err}"),
                    }
                }
                _ = shutdown.notified() => {
                    info!("accept loop stopping");
                    break;
                }
            }
        }
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

async fn handle_connection(
    stream: UnixStream,
    handler: &Handler,
    shutdown: &Notify,
    auto_shutdown_disabled: bool,
) {
    if let Err(PeerAuthError::UidMismatch { peer_uid, our_uid }) = security::verify_peer(&stream) {
        warn!("rejecting connection from uid {peer_uid} (expected {our_uid})");
        let (_r, mut writer) = stream.into_split();
        let _ = write_response(
            &mut writer,
            &Response::fail("permission denied: peer uid mismatch"),
            SERVER_DEADLINE,
        )
        .await;
        return;
    }

    let (read_half, mut writer) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let request = match read_request(&mut reader, SERVER_DEADLINE).await {
        Ok(request) => request,
        Err(ProtocolError::ConnectionClosed) | Err(ProtocolError::Timeout) => return,
        Err(err) => {
            let _ = write_response(&mut writer, &Response::fail(err.to_string()), SERVER_DEADLINE).await;
            return;
        }
    };

    debug!(method = request.method_name(), scope = ?request.scope(), "dispatching request");

    let is_shutdown_request = matches!(request, Request::Shutdown);
    let response = handler.dispatch(&request);
    let response = if auto_shutdown_disabled {
        response
    } else {
        classify(&request, response, handler.is_empty())
    };
    let will_shutdown = is_shutdown_request || response.will_shutdown == Some(true);

    if write_response(&mut writer, &response, SERVER_DEADLINE).await.is_ok() && will_shutdown {
        shutdown.notify_one();
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
