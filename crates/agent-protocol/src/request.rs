// SPDX-License-Identifier: MIT

//! Typed request variants (spec §6 method list).
//!
//! The original design dispatches on a bare method-name string (see
//! DESIGN.md). Here each method is a variant carrying its own payload, so
//! an unknown method is rejected at decode time instead of needing an
//! "unknown method" branch in the handler (spec §9 design notes).
//! Serializing as an internally-tagged enum with `scope` flattened still
//! produces the flat `{"method", "account_id", "region", ...}` wire object
//! spec §6 documents.

use agent_core::{Entry, Scope, Service, State, TagEntry};
use serde::{Deserialize, Serialize};

use crate::hint::Hint;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "method")]
pub enum Request {
    Ping,
    Shutdown,
    GetEntry {
        #[serde(flatten)]
        scope: Scope,
        service: Service,
        name: String,
    },
    GetTag {
        #[serde(flatten)]
        scope: Scope,
        service: Service,
        name: String,
    },
    ListEntries {
        #[serde(flatten)]
        scope: Scope,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        service: Option<Service>,
    },
    ListTags {
        #[serde(flatten)]
        scope: Scope,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        service: Option<Service>,
    },
    Load {
        #[serde(flatten)]
        scope: Scope,
    },
    StageEntry {
        #[serde(flatten)]
        scope: Scope,
        service: Service,
        name: String,
        entry: Entry,
    },
    StageTag {
        #[serde(flatten)]
        scope: Scope,
        service: Service,
        name: String,
        tag_entry: TagEntry,
    },
    UnstageEntry {
        #[serde(flatten)]
        scope: Scope,
        service: Service,
        name: String,
        #[serde(default)]
        hint: Hint,
    },
    UnstageTag {
        #[serde(flatten)]
        scope: Scope,
        service: Service,
        name: String,
        #[serde(default)]
        hint: Hint,
    },
    UnstageAll {
        #[serde(flatten)]
        scope: Scope,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        service: Option<Service>,
        #[serde(default)]
        hint: Hint,
    },
    GetState {
        #[serde(flatten)]
        scope: Scope,
    },
    SetState {
        #[serde(flatten)]
        scope: Scope,
        state: State,
    },
    IsEmpty,
    /// Additive method (spec §9 open question): atomic get-and-clear-if-
    /// `!keep` in a single handler invocation under one write lock.
    Take {
        #[serde(flatten)]
        scope: Scope,
        keep: bool,
    },
}

impl Request {
    /// The method name, for logging.
    pub fn method_name(&self) -> &'static str {
        match self {
            Request::Ping => "Ping",
            Request::Shutdown => "Shutdown",
            Request::GetEntry { .. } => "GetEntry",
            Request::GetTag { .. } => "GetTag",
            Request::ListEntries { .. } => "ListEntries",
            Request::ListTags { .. } => "ListTags",
            Request::Load { .. } => "Load",
            Request::StageEntry { .. } => "StageEntry",
            Request::StageTag { .. } => "StageTag",
            Request::UnstageEntry { .. } => "UnstageEntry",
            Request::UnstageTag { .. } => "UnstageTag",
            Request::UnstageAll { .. } => "UnstageAll",
            Request::GetState { .. } => "GetState",
            Request::SetState { .. } => "SetState",
            Request::IsEmpty => "IsEmpty",
            Request::Take { .. } => "Take",
        }
    }

    /// The scope a request targets, if any (`Ping`/`Shutdown`/`IsEmpty`
    /// are scope-less health/lifecycle calls).
    pub fn scope(&self) -> Option<&Scope> {
        match self {
            Request::Ping | Request::Shutdown | Request::IsEmpty => None,
            Request::GetEntry { scope, .. }
            | Request::GetTag { scope, .. }
            | Request::ListEntries { scope, .. }
            | Request::ListTags { scope, .. }
            | Request::Load { scope }
            | Request::StageEntry { scope, .. }
            | Request::StageTag { scope, .. }
            | Request::UnstageEntry { scope, .. }
            | Request::UnstageTag { scope, .. }
            | Request::UnstageAll { scope, .. }
            | Request::GetState { scope }
            | Request::SetState { scope, .. }
            | Request::Take { scope, .. } => Some(scope),
        }
    }
}
