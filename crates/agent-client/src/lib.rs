// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! agent-client: the process-side view of a staging agent.
//!
//! Composes IpcClient (§4.2 C6), Launcher (§4.3 C7) and ClientStore (§4.1
//! C8) behind one typed facade — the surrounding CLI never touches a
//! socket or a child process directly.

pub mod client_store;
pub mod env;
pub mod error;
pub mod ipc_client;
pub mod launcher;

pub use client_store::ClientStore;
pub use error::ClientError;
pub use ipc_client::IpcClient;
pub use launcher::{Launcher, ProcessSpawner, Spawner};
