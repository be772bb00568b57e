// SPDX-License-Identifier: MIT

//! Typed response envelope (spec §6).

use std::collections::HashMap;

use agent_core::{Entry, PerService, State, TagEntry};
use serde::{Deserialize, Serialize};

/// The well-known error string that must round-trip as a typed
/// `NotStaged` error on the client (spec §6 "Error convention").
pub const NOT_STAGED: &str = "not staged";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseData {
    // `deny_unknown_fields` is load-bearing here: untagged deserialization
    // tries variants in order and otherwise accepts the first one whose
    // fields merely don't conflict, ignoring keys it doesn't recognize.
    // `Entry`'s single field is an `Option`, so without this every other
    // variant's JSON (which has no `entry` key) would also match it.
    #[serde(deny_unknown_fields)]
    Entry {
        entry: Option<Entry>,
    },
    #[serde(deny_unknown_fields)]
    Tag {
        tag_entry: Option<TagEntry>,
    },
    #[serde(deny_unknown_fields)]
    Entries {
        entries: PerService<HashMap<String, Entry>>,
    },
    #[serde(deny_unknown_fields)]
    Tags {
        tags: PerService<HashMap<String, TagEntry>>,
    },
    #[serde(deny_unknown_fields)]
    State {
        state: State,
    },
    #[serde(deny_unknown_fields)]
    Empty {
        empty: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShutdownReason {
    Applied,
    Unstaged,
    Persisted,
    Cleared,
    Empty,
}

/// Error kinds a client can recover from specially (spec §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteErrorKind {
    NotStaged,
    Other(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_shutdown: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutdown_reason: Option<ShutdownReason>,
}

impl Response {
    pub fn ok(data: Option<ResponseData>) -> Self {
        Self {
            success: true,
            error: None,
            data,
            will_shutdown: None,
            shutdown_reason: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: None,
            will_shutdown: None,
            shutdown_reason: None,
        }
    }

    pub fn not_staged() -> Self {
        Self::fail(NOT_STAGED)
    }

    pub fn unknown_method(name: &str) -> Self {
        Self::fail(format!("unknown method: {name}"))
    }

    /// Attach the auto-shutdown verdict computed by the classifier
    /// (spec §4.5). Only called on an already-successful response.
    pub fn with_shutdown(mut self, reason: ShutdownReason) -> Self {
        self.will_shutdown = Some(true);
        self.shutdown_reason = Some(reason);
        self
    }

    pub fn error_kind(&self) -> Option<RemoteErrorKind> {
        let error = self.error.as_ref()?;
        if error == NOT_STAGED {
            Some(RemoteErrorKind::NotStaged)
        } else {
            Some(RemoteErrorKind::Other(error.clone()))
        }
    }
}
