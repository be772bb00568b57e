// SPDX-License-Identifier: MIT

//! ProcessSecurity: core-dump suppression and peer-uid verification
//! (spec §4.9 C9 ProcessSecurity).

#![allow(unsafe_code)]

use thiserror::Error;
use tokio::net::UnixStream;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeerAuthError {
    #[error("peer uid {peer_uid} does not match our uid {our_uid}")]
    UidMismatch { peer_uid: u32, our_uid: u32 },
    #[error("could not read peer credentials")]
    CredentialsUnavailable,
}

/// Disable core dumps for this process (spec §4.9 `setup`). Best-effort:
/// failure to set `RLIMIT_CORE` is logged, not fatal — a daemon that
/// cannot suppress core dumps should still serve requests.
pub fn setup() {
    #[cfg(target_os = "linux")]
    {
        // SAFETY: PR_SET_DUMPABLE takes no pointer arguments; the call
        // cannot be unsound regardless of process state.
        let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0, 0, 0, 0) };
        if rc != 0 {
            warn!("PR_SET_DUMPABLE failed: {}", std::io::Error::last_os_error());
        }
    }

    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: `limit` is a valid, fully-initialized `rlimit` on the stack;
    // `setrlimit` only reads through the pointer we give it.
    let rc = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) };
    if rc != 0 {
        warn!("RLIMIT_CORE=0 failed: {}", std::io::Error::last_os_error());
    }
}

/// Verify the connecting peer shares our uid (spec §4.4 step 2, §4.9
/// `verifyPeer`). Platforms without a peer-credential primitive accept
/// unconditionally, relying on socket-path permissions instead.
pub fn verify_peer(stream: &UnixStream) -> Result<(), PeerAuthError> {
    #[cfg(target_os = "linux")]
    {
        use std::os::unix::io::AsRawFd;

        let peer_uid = peer_uid_linux(stream.as_raw_fd())?;
        // SAFETY: `getuid` takes no arguments and cannot fail.
        let our_uid = unsafe { libc::getuid() };
        if peer_uid != our_uid {
            return Err(PeerAuthError::UidMismatch {
                peer_uid,
                our_uid,
            });
        }
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    {
        let _ = stream;
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn peer_uid_linux(fd: std::os::unix::io::RawFd) -> Result<u32, PeerAuthError> {
    use std::mem;

    let mut cred: libc::ucred = unsafe { mem::zeroed() };
    let mut len = mem::size_of::<libc::ucred>() as libc::socklen_t;

    // SAFETY: `cred` and `len` are valid, correctly-sized out-params for
    // SO_PEERCRED; `fd` is owned by `stream` for the duration of the call.
    let rc = unsafe {
        libc::getsockopt(
            fd,
            libc::SOL_SOCKET,
            libc::SO_PEERCRED,
            &mut cred as *mut _ as *mut libc::c_void,
            &mut len,
        )
    };
    if rc != 0 {
        return Err(PeerAuthError::CredentialsUnavailable);
    }
    Ok(cred.uid)
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod security_tests;
