// SPDX-License-Identifier: MIT

//! The per-process enclave key: generated once at daemon startup, held in
//! locked memory, never persisted.

use chacha20poly1305::Key;
use rand::RngCore;
use zeroize::Zeroize;

use crate::mlock;

pub struct EnclaveKey {
    locked: bool,
    bytes: [u8; 32],
}

impl EnclaveKey {
    /// Derive a fresh key from the process's CSPRNG and lock its pages.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        let locked = mlock::lock(&bytes);
        Self { locked, bytes }
    }

    pub(crate) fn as_chacha_key(&self) -> &Key {
        Key::from_slice(&self.bytes)
    }
}

impl Drop for EnclaveKey {
    fn drop(&mut self) {
        if self.locked {
            mlock::unlock(&self.bytes);
        }
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for EnclaveKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EnclaveKey(..)")
    }
}
