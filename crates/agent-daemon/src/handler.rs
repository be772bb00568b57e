// SPDX-License-Identifier: MIT

//! Method dispatch onto StateStore (spec §4.6 C3 Handler).
//!
//! A pure function of `(request, state)`: no I/O happens here beyond the
//! StateStore's own enclave encrypt/decrypt. Auto-shutdown classification
//! is not this component's job (spec §4.6) — it lives in
//! [`crate::shutdown`] and is applied by the Runner/IpcServer after a
//! successful dispatch.

use agent_core::State;
use agent_protocol::{Request, Response, ResponseData};

use crate::state_store::StateStore;

pub struct Handler {
    store: StateStore,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            store: StateStore::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn destroy(&self) {
        self.store.destroy();
    }

    /// Dispatch one request. `Load` is an alias for `GetState` (spec §4.6).
    pub fn dispatch(&self, request: &Request) -> Response {
        match self.try_dispatch(request) {
            Ok(response) => response,
            Err(err) => Response::fail(err.to_string()),
        }
    }

    fn try_dispatch(&self, request: &Request) -> Result<Response, HandlerError> {
        match request {
            Request::Ping => Ok(Response::ok(None)),

            Request::Shutdown => Ok(Response::ok(None)),

            Request::IsEmpty => Ok(Response::ok(Some(ResponseData::Empty {
                empty: self.is_empty(),
            }))),

            Request::GetEntry {
                scope,
                service,
                name,
            } => {
                let state = self.store.get(scope)?;
                Ok(Response::ok(Some(ResponseData::Entry {
                    entry: state.get_entry(*service, name).cloned(),
                })))
            }

            Request::GetTag {
                scope,
                service,
                name,
            } => {
                let state = self.store.get(scope)?;
                Ok(Response::ok(Some(ResponseData::Tag {
                    tag_entry: state.get_tag(*service, name).cloned(),
                })))
            }

            Request::ListEntries { scope, service } => {
                let state = self.store.get(scope)?;
                Ok(Response::ok(Some(ResponseData::Entries {
                    entries: state.list_entries(*service),
                })))
            }

            Request::ListTags { scope, service } => {
                let state = self.store.get(scope)?;
                Ok(Response::ok(Some(ResponseData::Tags {
                    tags: state.list_tags(*service),
                })))
            }

            Request::Load { scope } | Request::GetState { scope } => {
                let state = self.store.get(scope)?;
                Ok(Response::ok(Some(ResponseData::State { state })))
            }

            Request::StageEntry {
                scope,
                service,
                name,
                entry,
            } => {
                self.store.with_mut(scope, |state| {
                    state.stage_entry(*service, name.clone(), entry.clone());
                })?;
                Ok(Response::ok(None))
            }

            Request::StageTag {
                scope,
                service,
                name,
                tag_entry,
            } => {
                self.store.with_mut(scope, |state| {
                    state.stage_tag(*service, name.clone(), tag_entry.clone());
                })?;
                Ok(Response::ok(None))
            }

            Request::UnstageEntry {
                scope,
                service,
                name,
                ..
            } => {
                let removed = self
                    .store
                    .with_mut(scope, |state| state.unstage_entry(*service, name))?;
                if removed {
                    Ok(Response::ok(None))
                } else {
                    Ok(Response::not_staged())
                }
            }

            Request::UnstageTag {
                scope,
                service,
                name,
                ..
            } => {
                let removed = self
                    .store
                    .with_mut(scope, |state| state.unstage_tag(*service, name))?;
                if removed {
                    Ok(Response::ok(None))
                } else {
                    Ok(Response::not_staged())
                }
            }

            Request::UnstageAll { scope, service, .. } => {
                self.store
                    .with_mut(scope, |state| state.unstage_all(*service))?;
                Ok(Response::ok(None))
            }

            Request::SetState { scope, state } => {
                self.store.set(scope.clone(), state.clone())?;
                Ok(Response::ok(None))
            }

            Request::Take { scope, keep } => {
                let keep = *keep;
                let snapshot = self.store.with_mut(scope, |state| {
                    let snapshot = state.clone();
                    if !keep {
                        *state = State::default();
                    }
                    snapshot
                })?;
                Ok(Response::ok(Some(ResponseData::State { state: snapshot })))
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
enum HandlerError {
    #[error(transparent)]
    StateStore(#[from] crate::state_store::StateStoreError),
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod handler_tests;
