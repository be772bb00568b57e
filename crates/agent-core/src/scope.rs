// SPDX-License-Identifier: MIT

//! A scope partitions staged state by account and region.

use serde::{Deserialize, Serialize};

/// `(accountId, region)` — the partition key for staged state and the
/// input to the per-scope socket path derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub account_id: String,
    pub region: String,
}

impl Scope {
    pub fn new(account_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            region: region.into(),
        }
    }

    /// Path segments used to derive the socket path (§6): `<account>/<region>`.
    pub fn path_segments(&self) -> (&str, &str) {
        (&self.account_id, &self.region)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.account_id, self.region)
    }
}
