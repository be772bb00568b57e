// SPDX-License-Identifier: MIT

//! Per-scope secure state (spec §4.7 C2 StateStore).
//!
//! One enclave per scope, not per staged item: mutating any item
//! re-encrypts the whole scope. This trades encryption CPU for a much
//! smaller plaintext window — the per-scope state is never resident in
//! unlocked memory for longer than one operation.

use std::collections::HashMap;

use agent_core::{Scope, State};
use agent_enclave::{EnclaveKey, SecureEnclave};
use parking_lot::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error("enclave error: {0}")]
    Enclave(#[from] agent_enclave::EnclaveError),

    #[error("state could not be deserialized: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct StateStore {
    key: EnclaveKey,
    scopes: RwLock<HashMap<Scope, SecureEnclave>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            key: EnclaveKey::generate(),
            scopes: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a scope's State. Never errors for an absent or empty scope —
    /// a fresh, empty State is returned instead (spec §4.7 `get`).
    pub fn get(&self, scope: &Scope) -> Result<State, StateStoreError> {
        let scopes = self.scopes.read();
        let Some(enclave) = scopes.get(scope) else {
            return Ok(State::default());
        };
        if enclave.is_empty() {
            return Ok(State::default());
        }
        let plaintext = enclave.bytes(&self.key)?;
        let state = serde_json::from_slice(plaintext.as_slice())?;
        Ok(state)
    }

    /// Replace a scope's State wholesale. An empty State deletes the scope
    /// entry entirely (spec §4.7 `set`).
    pub fn set(&self, scope: Scope, state: State) -> Result<(), StateStoreError> {
        let mut scopes = self.scopes.write();
        if let Some(mut old) = scopes.remove(&scope) {
            old.destroy();
        }
        if state.is_empty() {
            return Ok(());
        }
        let mut plaintext = serde_json::to_vec(&state)?;
        let enclave = SecureEnclave::seal(&self.key, &mut plaintext);
        scopes.insert(scope, enclave);
        Ok(())
    }

    /// Read-modify-write a scope's State under one write-lock acquisition,
    /// so compound operations (e.g. `Take`) are atomic with respect to
    /// every other scope operation on this store (spec §9 open question
    /// on `Drain`/`Take`).
    pub fn with_mut<R>(
        &self,
        scope: &Scope,
        f: impl FnOnce(&mut State) -> R,
    ) -> Result<R, StateStoreError> {
        let mut scopes = self.scopes.write();
        let mut state = match scopes.get_mut(scope) {
            Some(enclave) if !enclave.is_empty() => {
                let plaintext = enclave.bytes(&self.key)?;
                serde_json::from_slice(plaintext.as_slice())?
            }
            _ => State::default(),
        };

        let result = f(&mut state);

        if let Some(mut old) = scopes.remove(scope) {
            old.destroy();
        }
        if !state.is_empty() {
            let mut plaintext = serde_json::to_vec(&state)?;
            let enclave = SecureEnclave::seal(&self.key, &mut plaintext);
            scopes.insert(scope.clone(), enclave);
        }

        Ok(result)
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.read().is_empty()
    }

    /// Wipe and drop every enclave (spec §4.7 `destroy`).
    pub fn destroy(&self) {
        let mut scopes = self.scopes.write();
        for (_, mut enclave) in scopes.drain() {
            enclave.destroy();
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_store_tests.rs"]
mod state_store_tests;
