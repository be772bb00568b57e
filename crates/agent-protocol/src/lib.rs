// SPDX-License-Identifier: MIT

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! agent-protocol: the IPC request/response protocol (spec §6).
//!
//! Wire format: newline-delimited JSON — exactly one request object and
//! exactly one response object per connection (spec §4.2 steps 3–4 and
//! §6 "Framing"). The source's loose introductory description in spec §1
//! calls this "length-prefixed"; the two places that actually pin down the
//! wire format (§4.2 and §6) both specify a trailing newline with no
//! length prefix, so that is what this crate implements — see DESIGN.md.

pub mod hint;
pub mod request;
pub mod response;
pub mod wire;

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
#[cfg(test)]
#[path = "response_tests.rs"]
mod response_tests;

pub use hint::Hint;
pub use request::Request;
pub use response::{RemoteErrorKind, Response, ResponseData, ShutdownReason, NOT_STAGED};
pub use wire::{read_request, read_response, write_request, write_response, ProtocolError};

/// Protocol version string, for diagnostics only — the wire contract has
/// no version-negotiation handshake (spec §6 has none; the teacher's
/// `PROTOCOL_VERSION` convention is kept purely for log lines).
pub const PROTOCOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default per-message deadline, server side (spec §4.4 step 1, ≈5s).
pub const SERVER_DEADLINE: std::time::Duration = std::time::Duration::from_secs(5);

/// Default end-to-end deadline, client side (spec §4.2 step 2, ≈1s).
pub const CLIENT_DEADLINE: std::time::Duration = std::time::Duration::from_secs(1);

/// Default dial timeout, client side (spec §4.2 step 1, ≈1s).
pub const DIAL_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(1);

/// Cap on a single message's JSON payload, to bound memory on a
/// misbehaving peer. Not specified numerically by the spec; chosen to be
/// generous for a `State` snapshot while rejecting pathological input.
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;
