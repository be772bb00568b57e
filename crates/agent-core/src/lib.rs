// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! agent-core: the staging agent's data model.
//!
//! Scope, Service, Entry, TagEntry and State are defined here and shared,
//! unchanged, by the daemon and the client crates. Nothing in this crate
//! does I/O.

pub mod entry;
pub mod error;
pub mod scope;
pub mod service;
pub mod state;
pub mod tag_entry;

#[cfg(test)]
#[path = "entry_tests.rs"]
mod entry_tests;
#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

pub use entry::{DeleteOptions, Entry, Operation};
pub use error::{EntryError, TagEntryError};
pub use scope::Scope;
pub use service::{PerService, Service};
pub use state::State;
pub use tag_entry::TagEntry;
