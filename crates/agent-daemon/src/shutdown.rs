// SPDX-License-Identifier: MIT

//! Auto-shutdown classifier (spec §4.5 "Auto-shutdown classifier").
//!
//! Runs as the IpcServer's `onResponse` hook, after a successful dispatch
//! and only when auto-shutdown is enabled. The table is the entire
//! contract: it decides whether this response should carry
//! `will_shutdown`/`shutdown_reason`, never whether the mutation itself
//! succeeded.

use agent_protocol::{Hint, Request, Response, ShutdownReason};

/// Classify a successful response, attaching `will_shutdown` /
/// `shutdown_reason` per spec §4.5's table. `is_empty` must be the
/// Handler's global emptiness *after* the mutation. A no-op for anything
/// already failed or for methods outside the table.
pub fn classify(request: &Request, response: Response, is_empty: bool) -> Response {
    if !response.success || !is_empty {
        return response;
    }

    let reason = match request {
        Request::UnstageEntry { hint, .. } | Request::UnstageTag { hint, .. } => match hint {
            Hint::Apply => ShutdownReason::Applied,
            Hint::Reset => ShutdownReason::Unstaged,
            Hint::Persist => ShutdownReason::Persisted,
            Hint::None => ShutdownReason::Empty,
        },
        // hint=reset is deliberately folded into the default branch here,
        // matching the source's classifier (spec §9 open question).
        Request::UnstageAll { hint, .. } => match hint {
            Hint::Apply => ShutdownReason::Applied,
            Hint::Persist => ShutdownReason::Persisted,
            Hint::Reset | Hint::None => ShutdownReason::Unstaged,
        },
        Request::SetState { .. } => ShutdownReason::Cleared,
        _ => return response,
    };

    response.with_shutdown(reason)
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod shutdown_tests;
