// SPDX-License-Identifier: MIT

//! Runner: daemon process lifecycle (spec §4.5 C5 Runner).

use std::sync::Arc;

use agent_core::Scope;
use thiserror::Error;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::Notify;
use tracing::info;

use crate::handler::Handler;
use crate::security;
use crate::server::{IpcServer, ServerError};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),
}

pub struct Runner {
    handler: Arc<Handler>,
    auto_shutdown_disabled: bool,
}

impl Runner {
    pub fn new(auto_shutdown_disabled: bool) -> Self {
        Self {
            handler: Arc::new(Handler::new()),
            auto_shutdown_disabled,
        }
    }

    /// A handle to the shared Handler, for tests that need to observe
    /// state after `run` has consumed `self`.
    pub fn handler(&self) -> Arc<Handler> {
        Arc::clone(&self.handler)
    }

    /// Bind the scope's socket, serve until SIGTERM/SIGINT, an internal
    /// auto/manual shutdown, or external cancellation, then wipe all
    /// enclaves (spec §4.5 `Run(ctx)`).
    pub async fn run(self, scope: &Scope, cancel: Arc<Notify>) -> Result<(), RunnerError> {
        security::setup();

        let server = IpcServer::bind(scope)?;
        info!(socket = %server.path().display(), "listening");

        let shutdown = Arc::new(Notify::new());
        let mut sigterm = signal(SignalKind::terminate()).map_err(RunnerError::Signal)?;
        let mut sigint = signal(SignalKind::interrupt()).map_err(RunnerError::Signal)?;

        tokio::select! {
            _ = server.serve(Arc::clone(&self.handler), Arc::clone(&shutdown), self.auto_shutdown_disabled) => {
                info!("shutting down: state is empty or a client requested it");
            }
            _ = sigterm.recv() => {
                info!("shutting down: received SIGTERM");
            }
            _ = sigint.recv() => {
                info!("shutting down: received SIGINT");
            }
            _ = cancel.notified() => {
                info!("shutting down: context cancelled");
            }
        }

        self.handler.destroy();
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
