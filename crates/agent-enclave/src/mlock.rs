// SPDX-License-Identifier: MIT

//! Thin wrapper around `mlock`/`munlock`. Unsupported platforms (spec §4.9
//! "platforms without peer-credential primitives... rely on ACLs") get a
//! no-op that always reports success, matching the spec's "accept" fallback
//! for missing platform primitives.

#![allow(unsafe_code)]

#[cfg(unix)]
pub(crate) fn lock(buf: &[u8]) -> bool {
    if buf.is_empty() {
        return true;
    }
    // SAFETY: `buf` is a valid slice for the duration of this call; mlock
    // only pins the backing pages and does not retain the pointer.
    let rc = unsafe { libc::mlock(buf.as_ptr().cast(), buf.len()) };
    rc == 0
}

#[cfg(unix)]
pub(crate) fn unlock(buf: &[u8]) {
    if buf.is_empty() {
        return;
    }
    // SAFETY: see `lock` above.
    unsafe {
        libc::munlock(buf.as_ptr().cast(), buf.len());
    }
}

#[cfg(not(unix))]
pub(crate) fn lock(_buf: &[u8]) -> bool {
    true
}

#[cfg(not(unix))]
pub(crate) fn unlock(_buf: &[u8]) {}
