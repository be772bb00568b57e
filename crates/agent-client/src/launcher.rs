// SPDX-License-Identifier: MIT

//! `Launcher` — ensure-running, spawn-and-wait (spec §4.3 C7 Launcher).
//!
//! Grounded on the teacher's `DaemonClient::connect_or_start_once` /
//! `connect_with_retry` (`crates/cli/src/client.rs`): poll `Ping`, spawn a
//! detached child on the first miss, retry until `connectTimeout` elapses.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use agent_core::Scope;
use tracing::info;

use crate::env;
use crate::error::ClientError;
use crate::ipc_client::IpcClient;

/// Spawns a fresh `agentd` process for one scope. Injected so tests can
/// substitute a fake without touching `std::process::Command`.
pub trait Spawner: Send + Sync {
    fn spawn(&self, scope: &Scope) -> std::io::Result<()>;
}

/// Re-execs the current binary (or `STAGE_DAEMON_BINARY`, if set) with
/// `--foreground --account <id> --region <region>` and releases it
/// immediately (spec §4.3 step 3: "the spawned child must detach").
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, scope: &Scope) -> std::io::Result<()> {
        let binary = daemon_binary_path();
        std::process::Command::new(binary)
            .arg("start")
            .arg("--foreground")
            .arg("--account")
            .arg(&scope.account_id)
            .arg("--region")
            .arg(&scope.region)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

fn daemon_binary_path() -> PathBuf {
    if let Some(path) = env::daemon_binary() {
        return PathBuf::from(path);
    }
    if let Some(exe) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        let sibling = exe.join("agentd");
        if sibling.exists() {
            return sibling;
        }
    }
    PathBuf::from("agentd")
}

pub struct Launcher<S: Spawner = ProcessSpawner> {
    scope: Scope,
    client: IpcClient,
    auto_start_disabled: bool,
    spawner: S,
}

impl Launcher<ProcessSpawner> {
    pub fn new(scope: Scope) -> Self {
        let socket_path = agent_daemon_socket_path(&scope);
        Self {
            scope,
            client: IpcClient::new(socket_path),
            auto_start_disabled: env::auto_start_disabled(),
            spawner: ProcessSpawner,
        }
    }
}

impl<S: Spawner> Launcher<S> {
    pub fn with_spawner(scope: Scope, auto_start_disabled: bool, spawner: S) -> Self {
        let socket_path = agent_daemon_socket_path(&scope);
        Self {
            scope,
            client: IpcClient::new(socket_path),
            auto_start_disabled,
            spawner,
        }
    }

    pub fn client(&self) -> &IpcClient {
        &self.client
    }

    /// Ping; if that fails, spawn (unless autostart is disabled) and poll
    /// until the daemon answers or `connectTimeout` elapses (spec §4.3
    /// `EnsureRunning`).
    pub async fn ensure_running(&self) -> Result<(), ClientError> {
        if self.client.ping().await.is_ok() {
            return Ok(());
        }

        if self.auto_start_disabled {
            return Err(ClientError::ManualModeRefused);
        }

        self.spawner.spawn(&self.scope).map_err(ClientError::Transport)?;

        let deadline = Instant::now() + env::timeout_connect();
        while Instant::now() < deadline {
            if self.client.ping().await.is_ok() {
                info!("staging agent started for {}", self.scope);
                return Ok(());
            }
            tokio::time::sleep(env::retry_delay()).await;
        }

        Err(ClientError::DaemonDidNotStart)
    }

    /// Idempotent: safe to call even if the daemon was never started.
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        match self.client.send(&agent_protocol::Request::Shutdown).await {
            Ok(_) => Ok(()),
            Err(ClientError::NotConnected) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Pass-through that does *not* call `ensure_running` (spec §4.3),
    /// so ad-hoc probes stay cheap.
    pub async fn send_request(
        &self,
        request: &agent_protocol::Request,
    ) -> Result<agent_protocol::Response, ClientError> {
        self.client.send(request).await
    }
}

fn agent_daemon_socket_path(scope: &Scope) -> PathBuf {
    agent_daemon::socket_path::socket_path(scope)
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod launcher_tests;
