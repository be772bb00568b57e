// SPDX-License-Identifier: MIT

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! agent-enclave: cleartext containment for staged secrets (spec §4.8 C1
//! SecureEnclave).
//!
//! A `SecureEnclave` holds one opaque, encrypted-at-rest byte payload.
//! Pages backing the ciphertext are locked (`mlock`) so they never swap.
//! The encryption key lives in a separate, also-locked, `EnclaveKey` that
//! the caller constructs once per daemon process and threads through —
//! there is no process-wide singleton here (see DESIGN.md).

mod key;
mod locked_buffer;
mod mlock;


pub use key::EnclaveKey;
pub use locked_buffer::SecretBuffer;

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Nonce};
use rand::RngCore;
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnclaveError {
    #[error("enclave is empty")]
    Empty,

    #[error("enclave payload could not be decrypted (corrupt or wrong key)")]
    DecryptFailed,
}

const NONCE_LEN: usize = 12;

/// A single opaque, encrypted, locked-memory payload.
pub struct SecureEnclave {
    // `nonce || ciphertext`, or empty when the enclave holds nothing.
    sealed: Vec<u8>,
}

impl SecureEnclave {
    /// An empty enclave (no payload held).
    pub fn empty() -> Self {
        Self { sealed: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.sealed.is_empty()
    }

    /// Encrypt `plaintext` under `key` into a fresh enclave, then wipe
    /// `plaintext` in place. The caller must not keep any other reference
    /// to the original bytes (spec §4.8 `newBuffer`).
    pub fn seal(key: &EnclaveKey, plaintext: &mut Vec<u8>) -> Self {
        let cipher = ChaCha20Poly1305::new(key.as_chacha_key());
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        // encrypt() never fails for this AEAD/key/nonce combination.
        let ciphertext = cipher
            .encrypt(nonce, plaintext.as_slice())
            .unwrap_or_default();

        plaintext.zeroize();
        plaintext.clear();

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);
        mlock::lock(&sealed);
        Self { sealed }
    }

    /// Decrypt into a caller-owned buffer that wipes itself on drop.
    pub fn bytes(&self, key: &EnclaveKey) -> Result<SecretBuffer, EnclaveError> {
        if self.sealed.len() < NONCE_LEN {
            return Err(EnclaveError::Empty);
        }
        let (nonce_bytes, ciphertext) = self.sealed.split_at(NONCE_LEN);
        let cipher = ChaCha20Poly1305::new(key.as_chacha_key());
        let nonce = Nonce::from_slice(nonce_bytes);
        let plaintext = cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| EnclaveError::DecryptFailed)?;
        Ok(SecretBuffer::new(plaintext))
    }

    /// Wipe the encrypted pages. The enclave becomes empty.
    pub fn destroy(&mut self) {
        mlock::unlock(&self.sealed);
        self.sealed.zeroize();
        self.sealed.clear();
        self.sealed.shrink_to_fit();
    }
}

impl Drop for SecureEnclave {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for SecureEnclave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureEnclave")
            .field("is_empty", &self.is_empty())
            .finish()
    }
}
