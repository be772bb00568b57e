// SPDX-License-Identifier: MIT

//! A staged add/remove of key/value labels on one named resource,
//! independent of that resource's Entry (spec §3 "TagEntry").

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::TagEntryError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagEntry {
    #[serde(default)]
    pub add: HashMap<String, String>,
    #[serde(default)]
    pub remove: HashSet<String>,
    pub staged_at_ms: u64,
}

impl TagEntry {
    /// Construct a TagEntry, enforcing spec §3's invariants: `add` and
    /// `remove` keys are disjoint, and the entry is not empty (an empty
    /// `add`+`remove` TagEntry must not exist — callers unstage instead).
    pub fn try_new(
        add: HashMap<String, String>,
        remove: HashSet<String>,
        staged_at_ms: u64,
    ) -> Result<Self, TagEntryError> {
        if add.is_empty() && remove.is_empty() {
            return Err(TagEntryError::Empty);
        }
        if let Some(key) = remove.iter().find(|k| add.contains_key(k.as_str())) {
            return Err(TagEntryError::KeyInBothAddAndRemove(key.clone()));
        }
        Ok(Self {
            add,
            remove,
            staged_at_ms,
        })
    }
}
