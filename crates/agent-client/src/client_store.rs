// SPDX-License-Identifier: MIT

//! `ClientStore` — the store-facing operator interface (spec §4.1 C8
//! ClientStore).
//!
//! Thin typed adapter onto [`Launcher`]: for every operation it (1)
//! ensures the daemon is running, (2) issues one request, (3) decodes the
//! typed response or propagates a typed error. Callers never see sockets
//! or processes.

use std::collections::HashMap;

use agent_core::{Entry, PerService, Scope, Service, State, TagEntry};
use agent_protocol::{Hint, Request, ResponseData};

use crate::error::ClientError;
use crate::launcher::{Launcher, ProcessSpawner, Spawner};

pub struct ClientStore<S: Spawner = ProcessSpawner> {
    scope: Scope,
    launcher: Launcher<S>,
}

impl ClientStore<ProcessSpawner> {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope: scope.clone(),
            launcher: Launcher::new(scope),
        }
    }
}

impl<S: Spawner> ClientStore<S> {
    pub fn with_launcher(scope: Scope, launcher: Launcher<S>) -> Self {
        Self { scope, launcher }
    }

    async fn call(&self, request: Request) -> Result<agent_protocol::Response, ClientError> {
        self.launcher.ensure_running().await?;
        self.launcher.send_request(&request).await
    }

    pub async fn get_entry(&self, service: Service, name: &str) -> Result<Entry, ClientError> {
        let response = self
            .call(Request::GetEntry {
                scope: self.scope.clone(),
                service,
                name: name.to_string(),
            })
            .await?;
        match response.data {
            Some(ResponseData::Entry { entry: Some(entry) }) => Ok(entry),
            _ => Err(ClientError::NotStaged),
        }
    }

    pub async fn get_tag(&self, service: Service, name: &str) -> Result<TagEntry, ClientError> {
        let response = self
            .call(Request::GetTag {
                scope: self.scope.clone(),
                service,
                name: name.to_string(),
            })
            .await?;
        match response.data {
            Some(ResponseData::Tag { tag_entry: Some(tag) }) => Ok(tag),
            _ => Err(ClientError::NotStaged),
        }
    }

    pub async fn list_entries(
        &self,
        service: Option<Service>,
    ) -> Result<PerService<HashMap<String, Entry>>, ClientError> {
        let response = self
            .call(Request::ListEntries {
                scope: self.scope.clone(),
                service,
            })
            .await?;
        match response.data {
            Some(ResponseData::Entries { entries }) => Ok(entries),
            _ => Ok(PerService::default()),
        }
    }

    pub async fn list_tags(
        &self,
        service: Option<Service>,
    ) -> Result<PerService<HashMap<String, TagEntry>>, ClientError> {
        let response = self
            .call(Request::ListTags {
                scope: self.scope.clone(),
                service,
            })
            .await?;
        match response.data {
            Some(ResponseData::Tags { tags }) => Ok(tags),
            _ => Ok(PerService::default()),
        }
    }

    /// Full `State`; an untouched scope returns an empty `State`, not
    /// `NotStaged` (spec §4.1 `Load`).
    pub async fn load(&self) -> Result<State, ClientError> {
        let response = self
            .call(Request::Load {
                scope: self.scope.clone(),
            })
            .await?;
        match response.data {
            Some(ResponseData::State { state }) => Ok(state),
            _ => Ok(State::default()),
        }
    }

    pub async fn stage_entry(
        &self,
        service: Service,
        name: &str,
        entry: Entry,
    ) -> Result<(), ClientError> {
        self.call(Request::StageEntry {
            scope: self.scope.clone(),
            service,
            name: name.to_string(),
            entry,
        })
        .await
        .map(|_| ())
    }

    pub async fn stage_tag(
        &self,
        service: Service,
        name: &str,
        tag_entry: TagEntry,
    ) -> Result<(), ClientError> {
        self.call(Request::StageTag {
            scope: self.scope.clone(),
            service,
            name: name.to_string(),
            tag_entry,
        })
        .await
        .map(|_| ())
    }

    pub async fn unstage_entry(
        &self,
        service: Service,
        name: &str,
        hint: Hint,
    ) -> Result<(), ClientError> {
        self.call(Request::UnstageEntry {
            scope: self.scope.clone(),
            service,
            name: name.to_string(),
            hint,
        })
        .await
        .map(|_| ())
    }

    pub async fn unstage_tag(
        &self,
        service: Service,
        name: &str,
        hint: Hint,
    ) -> Result<(), ClientError> {
        self.call(Request::UnstageTag {
            scope: self.scope.clone(),
            service,
            name: name.to_string(),
            hint,
        })
        .await
        .map(|_| ())
    }

    /// Idempotent: clearing an already-empty scope still succeeds (spec
    /// §4.1 `UnstageAll`).
    pub async fn unstage_all(&self, service: Option<Service>, hint: Hint) -> Result<(), ClientError> {
        self.call(Request::UnstageAll {
            scope: self.scope.clone(),
            service,
            hint,
        })
        .await
        .map(|_| ())
    }

    /// `Drain(keep=false)` is implemented directly on the additive `Take`
    /// wire method rather than the documented GetState+UnstageAll pair, so
    /// the snapshot-and-clear happens atomically under one StateStore
    /// write-lock acquisition instead of racing a second request (spec §9
    /// open question on `Drain`).
    pub async fn drain(&self, keep: bool) -> Result<State, ClientError> {
        let response = self
            .call(Request::Take {
                scope: self.scope.clone(),
                keep,
            })
            .await?;
        match response.data {
            Some(ResponseData::State { state }) => Ok(state),
            _ => Ok(State::default()),
        }
    }

    /// Replace the scope's State wholesale. An empty State removes the
    /// scope entry and may trigger auto-shutdown (spec §4.1 `WriteState`).
    pub async fn write_state(&self, state: State) -> Result<(), ClientError> {
        self.call(Request::SetState {
            scope: self.scope.clone(),
            state,
        })
        .await
        .map(|_| ())
    }
}

#[cfg(test)]
#[path = "client_store_tests.rs"]
mod client_store_tests;
