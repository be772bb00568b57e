// SPDX-License-Identifier: MIT

//! Per-scope staging state (spec §3 "State").

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::service::{PerService, Service};
use crate::tag_entry::TagEntry;

/// All staged entries and tags for one scope.
///
/// `State.is_empty()` ⇔ every inner map is empty. A scope whose State
/// becomes empty is dropped from the daemon's scope table (spec §3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub entries: PerService<HashMap<String, Entry>>,
    #[serde(default)]
    pub tags: PerService<HashMap<String, TagEntry>>,
    /// Monotone format tag; not interpreted by the core beyond pass-through.
    #[serde(default)]
    pub version: u32,
}

impl State {
    pub fn is_empty(&self) -> bool {
        self.entries.param.is_empty()
            && self.entries.secret.is_empty()
            && self.tags.param.is_empty()
            && self.tags.secret.is_empty()
    }

    pub fn get_entry(&self, service: Service, name: &str) -> Option<&Entry> {
        self.entries.get(service).get(name)
    }

    pub fn get_tag(&self, service: Service, name: &str) -> Option<&TagEntry> {
        self.tags.get(service).get(name)
    }

    /// Stage an entry — last-write-wins (spec invariant 4).
    pub fn stage_entry(&mut self, service: Service, name: impl Into<String>, entry: Entry) {
        self.entries.get_mut(service).insert(name.into(), entry);
    }

    /// Stage a tag entry — last-write-wins.
    pub fn stage_tag(&mut self, service: Service, name: impl Into<String>, tag: TagEntry) {
        self.tags.get_mut(service).insert(name.into(), tag);
    }

    /// Returns `true` if an Entry was present and removed.
    pub fn unstage_entry(&mut self, service: Service, name: &str) -> bool {
        self.entries.get_mut(service).remove(name).is_some()
    }

    /// Returns `true` if a TagEntry was present and removed.
    pub fn unstage_tag(&mut self, service: Service, name: &str) -> bool {
        self.tags.get_mut(service).remove(name).is_some()
    }

    /// Clear entries and tags for one service, or both if `service` is `None`.
    pub fn unstage_all(&mut self, service: Option<Service>) {
        match service {
            Some(svc) => {
                self.entries.get_mut(svc).clear();
                self.tags.get_mut(svc).clear();
            }
            None => {
                self.entries.param.clear();
                self.entries.secret.clear();
                self.tags.param.clear();
                self.tags.secret.clear();
            }
        }
    }

    pub fn list_entries(&self, service: Option<Service>) -> PerService<HashMap<String, Entry>> {
        self.filtered(service, |s| s.entries.get(Service::Param).clone(), |s| s.entries.get(Service::Secret).clone())
    }

    pub fn list_tags(&self, service: Option<Service>) -> PerService<HashMap<String, TagEntry>> {
        self.filtered(service, |s| s.tags.get(Service::Param).clone(), |s| s.tags.get(Service::Secret).clone())
    }

    fn filtered<T: Default + Clone>(
        &self,
        service: Option<Service>,
        param: impl Fn(&State) -> T,
        secret: impl Fn(&State) -> T,
    ) -> PerService<T> {
        match service {
            Some(Service::Param) => PerService {
                param: param(self),
                secret: T::default(),
            },
            Some(Service::Secret) => PerService {
                param: T::default(),
                secret: secret(self),
            },
            None => PerService {
                param: param(self),
                secret: secret(self),
            },
        }
    }
}
