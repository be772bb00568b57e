// SPDX-License-Identifier: MIT

//! A decrypted plaintext buffer that wipes itself on drop.
//!
//! The spec (§4.8) puts the wipe obligation on the caller of
//! `SecureEnclave::bytes`. Returning a type that wipes itself
//! automatically makes that obligation unforgettable instead of merely
//! documented, without changing the contract: the buffer is still
//! caller-owned and still wiped before it is freed.

use zeroize::Zeroize;

pub struct SecretBuffer(Vec<u8>);

impl SecretBuffer {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl std::ops::Deref for SecretBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretBuffer(..)")
    }
}
