// SPDX-License-Identifier: MIT

//! Centralized environment variable access (spec §6 "Environment variables").

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Deadline for establishing the Unix socket connection.
pub fn timeout_dial() -> Duration {
    parse_duration_ms("STAGE_TIMEOUT_DIAL_MS").unwrap_or(Duration::from_millis(1000))
}

/// End-to-end deadline covering request send plus response receive.
pub fn timeout_request() -> Duration {
    parse_duration_ms("STAGE_TIMEOUT_REQUEST_MS").unwrap_or(Duration::from_millis(1000))
}

/// Deadline for the Launcher to observe a freshly spawned daemon answer Ping.
pub fn timeout_connect() -> Duration {
    parse_duration_ms("STAGE_TIMEOUT_CONNECT_MS").unwrap_or(Duration::from_secs(5))
}

/// Interval between Ping retries while waiting for a daemon to come up.
pub fn retry_delay() -> Duration {
    parse_duration_ms("STAGE_RETRY_DELAY_MS").unwrap_or(Duration::from_millis(100))
}

/// Override for the `agentd` binary the Launcher spawns (defaults to a
/// sibling of the current executable, else bare `agentd` on PATH).
pub fn daemon_binary() -> Option<String> {
    std::env::var("STAGE_DAEMON_BINARY").ok()
}

/// When set to `"0"`, `Launcher::ensure_running` never spawns a daemon and
/// fails with `ClientError::ManualModeRefused` instead (GLOSSARY "Manual
/// mode").
pub fn auto_start_disabled() -> bool {
    std::env::var("STAGE_DAEMON_AUTO_START").is_ok_and(|v| v == "0")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod env_tests;
