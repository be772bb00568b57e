// SPDX-License-Identifier: MIT

//! Per-scope socket path derivation (spec §6 "Socket path").
//!
//! `<runtime-dir>/<appname>/<accountId>/<region>/agent.sock`, where
//! `<runtime-dir>` is `XDG_RUNTIME_DIR` on Linux, `TMPDIR` on macOS, or
//! `/tmp/<appname>-<uid>` as a last resort. Intermediate directories get
//! mode 0700; the socket file itself gets 0600.

use std::path::PathBuf;

use agent_core::Scope;

pub const APP_NAME: &str = "stage-agent";

/// Resolve the socket path for a scope, without touching the filesystem.
pub fn socket_path(scope: &Scope) -> PathBuf {
    let (account_id, region) = scope.path_segments();
    runtime_dir()
        .join(APP_NAME)
        .join(account_id)
        .join(region)
        .join("agent.sock")
}

fn runtime_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STAGE_RUNTIME_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Ok(dir) = std::env::var("XDG_RUNTIME_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Ok(dir) = std::env::var("TMPDIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(format!("/tmp/{APP_NAME}-{}", current_uid()))
}

#[cfg(unix)]
fn current_uid() -> u32 {
    // SAFETY: `getuid` takes no arguments and cannot fail.
    unsafe { libc::getuid() }
}

#[cfg(not(unix))]
fn current_uid() -> u32 {
    0
}

/// Create the socket's parent directories with 0700 permissions, probing
/// and removing any stale socket file left at `path` (spec §4.4 "Socket
/// setup"). Does not bind; the caller binds immediately afterward to keep
/// the probe-then-bind window short.
#[cfg(unix)]
pub fn prepare(path: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        create_dir_all_0700(parent)?;
    }

    if path.exists() {
        if probe(path) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!("a daemon is already listening on {}", path.display()),
            ));
        }
        std::fs::remove_file(path)?;
    }

    Ok(())
}

#[cfg(unix)]
fn create_dir_all_0700(dir: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if dir.exists() {
        return Ok(());
    }
    if let Some(parent) = dir.parent() {
        create_dir_all_0700(parent)?;
    }
    std::fs::create_dir(dir)?;
    std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700))
}

/// Set the socket file's mode to 0600 after bind (spec §4.4).
#[cfg(unix)]
pub fn lock_down_mode(path: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

/// Probe whether a Unix socket is currently accepting connections.
pub fn probe(path: &std::path::Path) -> bool {
    std::os::unix::net::UnixStream::connect(path).is_ok()
}

#[cfg(test)]
#[path = "socket_path_tests.rs"]
mod socket_path_tests;
